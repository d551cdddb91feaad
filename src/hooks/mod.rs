//! Leptos hooks over the shared state modules.
//!
//! ARCHITECTURE
//! ============
//! `query` owns the signal-backed cache; `auth` and `admin` expose session
//! handles on top of it; `notify` surfaces transient messages.

pub mod admin;
pub mod auth;
pub mod notify;
pub mod query;
