//! Networking modules for the REST auth surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `error` defines the failure taxonomy, and `types`
//! holds the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
