//! Back-office session view and login/logout mutation state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin pages read `AdminView` to decide between rendering and redirecting
//! to `/admin/login`; the login form reads `AdminMutationState` for its busy
//! flag and error text.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::error::ApiError;
use crate::net::types::{AdminCredentials, AdminSession};
use crate::state::query::QueryState;

/// Session facts derived from the cached admin probe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminView {
    pub authenticated: bool,
    pub email: Option<String>,
    pub loading: bool,
}

impl AdminView {
    /// A failed probe reads as signed out.
    pub fn from_query(query: &QueryState<AdminSession>) -> Self {
        let session = query.data.as_ref().filter(|s| s.authenticated);
        Self {
            authenticated: session.is_some(),
            email: session.and_then(|s| s.email.clone()),
            loading: query.is_loading(),
        }
    }

    pub fn should_redirect_to_login(&self) -> bool {
        !self.loading && !self.authenticated
    }

    pub fn should_leave_login_page(&self) -> bool {
        !self.loading && self.authenticated
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminMutationState {
    pub logging_in: bool,
    pub logging_out: bool,
    pub login_error: Option<String>,
}

impl AdminMutationState {
    /// # Errors
    ///
    /// Returns `ApiError::Busy` while a login is already in flight.
    pub fn begin_login(&mut self) -> Result<(), ApiError> {
        if self.logging_in {
            return Err(ApiError::Busy);
        }
        self.logging_in = true;
        self.login_error = None;
        Ok(())
    }

    /// Returns `true` when the session query should be invalidated.
    pub fn finish_login(&mut self, result: &Result<(), ApiError>) -> bool {
        self.logging_in = false;
        match result {
            Ok(()) => {
                self.login_error = None;
                true
            }
            Err(err) => {
                self.login_error = Some(err.login_message());
                false
            }
        }
    }

    /// Record a failure that happened before any request was sent.
    pub fn reject_login(&mut self, err: &ApiError) {
        self.login_error = Some(err.login_message());
    }

    /// Returns `false` if a logout is already running.
    pub fn begin_logout(&mut self) -> bool {
        if self.logging_out {
            return false;
        }
        self.logging_out = true;
        true
    }

    /// Returns `true` when the session query should be invalidated.
    pub fn finish_logout(&mut self, result: &Result<(), ApiError>) -> bool {
        self.logging_out = false;
        result.is_ok()
    }
}

/// Trim and check form input before contacting the server.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` describing the first problem.
pub fn validate_credentials(email: &str, password: &str) -> Result<AdminCredentials, ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::InvalidInput("Enter your email."));
    }
    if !email.contains('@') {
        return Err(ApiError::InvalidInput("Enter a valid email address."));
    }
    if password.is_empty() {
        return Err(ApiError::InvalidInput("Enter your password."));
    }
    Ok(AdminCredentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}
