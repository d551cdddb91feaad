//! Reusable UI components shared across pages.

pub mod admin_shell;
pub mod site_header;
pub mod toaster;
