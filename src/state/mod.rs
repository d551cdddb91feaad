//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Everything here is plain data with pure transitions so it can be tested
//! natively. The Leptos hooks in `crate::hooks` wrap these in signals.

pub mod admin;
pub mod notify;
pub mod preference;
pub mod query;
pub mod reconcile;
