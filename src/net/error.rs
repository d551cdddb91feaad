//! Error type shared by every REST helper.
//!
//! ERROR HANDLING
//! ==============
//! Helpers never panic; they return `ApiError` and the hooks decide whether a
//! failure becomes a state value (no session) or a notification.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("request already in progress")]
    Busy,
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether the server rejected the caller's credentials or session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401 | 403))
    }

    /// Text for the admin login form.
    pub fn login_message(&self) -> String {
        match self {
            _ if self.is_unauthorized() => "Invalid email or password.".to_owned(),
            Self::Status(status) if *status >= 500 => "The server had a problem. Try again shortly.".to_owned(),
            Self::InvalidInput(msg) => (*msg).to_owned(),
            _ => self.user_message(),
        }
    }

    /// Text for transient notifications.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::Unavailable => "Could not reach the server.".to_owned(),
            Self::Status(status) => format!("The server responded with status {status}."),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
            Self::InvalidInput(msg) => (*msg).to_owned(),
            Self::Busy => "Please wait for the current request to finish.".to_owned(),
        }
    }
}

/// Map an HTTP status line to `Ok(())` or `ApiError::Status`.
///
/// # Errors
///
/// Returns `ApiError::Status` when `ok` is false.
pub fn check_status(ok: bool, status: u16) -> Result<(), ApiError> {
    if ok { Ok(()) } else { Err(ApiError::Status(status)) }
}
