//! REST API helpers for the auth and admin endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every helper returns
//! `ApiError::Unavailable` since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so probe and mutation
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AdminCredentials, AdminSession, User, UserType};
#[cfg(feature = "hydrate")]
use super::{error::check_status, types::UpdateUserTypeRequest};
#[cfg(feature = "hydrate")]
use crate::config::api_url;

pub const CURRENT_USER_PATH: &str = "/api/auth/user";
pub const USER_TYPE_PATH: &str = "/api/auth/user/type";
pub const ADMIN_SESSION_PATH: &str = "/api/admin/session";
pub const ADMIN_LOGIN_PATH: &str = "/api/admin/login";
pub const ADMIN_LOGOUT_PATH: &str = "/api/admin/logout";
/// Full-page navigation targets for the end-user identity provider.
pub const USER_LOGIN_PATH: &str = "/api/login";
pub const USER_LOGOUT_PATH: &str = "/api/logout";

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn decode(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Fetch the signed-in user from `GET /api/auth/user`.
///
/// # Errors
///
/// Any non-200 answer means "not signed in" to callers.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url(CURRENT_USER_PATH))
            .send()
            .await
            .map_err(network)?;
        check_status(resp.ok(), resp.status())?;
        resp.json::<User>().await.map_err(decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Persist a user type via `PATCH /api/auth/user/type`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the update.
pub async fn update_user_type(user_type: UserType) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&api_url(USER_TYPE_PATH))
            .json(&UpdateUserTypeRequest { user_type })
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        check_status(resp.ok(), resp.status())?;
        resp.json::<User>().await.map_err(decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_type;
        Err(ApiError::Unavailable)
    }
}

/// Probe the admin session via `GET /api/admin/session`.
///
/// # Errors
///
/// Returns an error if the request fails or the response is not a session.
pub async fn fetch_admin_session() -> Result<AdminSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url(ADMIN_SESSION_PATH))
            .send()
            .await
            .map_err(network)?;
        check_status(resp.ok(), resp.status())?;
        resp.json::<AdminSession>().await.map_err(decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Sign in to the back office via `POST /api/admin/login`.
///
/// # Errors
///
/// Returns `ApiError::Status(401)` (or another 4xx) on bad credentials.
pub async fn admin_login(credentials: &AdminCredentials) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_url(ADMIN_LOGIN_PATH))
            .json(credentials)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        check_status(resp.ok(), resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// End the back-office session via `POST /api/admin/logout`.
///
/// # Errors
///
/// Returns an error if the request fails; callers treat this as harmless.
pub async fn admin_logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_url(ADMIN_LOGOUT_PATH))
            .send()
            .await
            .map_err(network)?;
        check_status(resp.ok(), resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
