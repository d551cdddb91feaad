//! Back-office session hook and page guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin probe is started lazily by the first `use_admin_session` call so
//! marketing pages never hit the admin API. Once started it is re-run
//! whenever the window regains focus, which catches sessions that expired
//! while the tab was in the background.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::hooks::query::QueryClient;
use crate::net::api;
use crate::net::error::ApiError;
use crate::routes::ADMIN_LOGIN_PATH;
use crate::state::admin::{AdminMutationState, AdminView, validate_credentials};
use crate::state::query::QueryKey;

#[derive(Clone, Copy)]
pub struct AdminHandle {
    client: QueryClient,
    mutations: RwSignal<AdminMutationState>,
}

impl AdminHandle {
    pub fn view(&self) -> AdminView {
        self.client.admin_session.with(AdminView::from_query)
    }

    pub fn is_authenticated(&self) -> bool {
        self.view().authenticated
    }

    pub fn email(&self) -> Option<String> {
        self.view().email
    }

    pub fn is_loading(&self) -> bool {
        self.view().loading
    }

    pub fn login_error(&self) -> Option<String> {
        self.mutations.with(|m| m.login_error.clone())
    }

    pub fn is_logging_in(&self) -> bool {
        self.mutations.with(|m| m.logging_in)
    }

    pub fn is_logging_out(&self) -> bool {
        self.mutations.with(|m| m.logging_out)
    }

    /// Sign in and refresh the session on success.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Busy` while another login is running, otherwise the
    /// validation or server error; the cached session is left untouched.
    pub async fn login(self, email: String, password: String) -> Result<(), ApiError> {
        if self.mutations.with_untracked(|m| m.logging_in) {
            return Err(ApiError::Busy);
        }
        let credentials = match validate_credentials(&email, &password) {
            Ok(credentials) => credentials,
            Err(err) => {
                self.mutations.update(|m| m.reject_login(&err));
                return Err(err);
            }
        };
        self.mutations
            .try_update(AdminMutationState::begin_login)
            .unwrap_or(Err(ApiError::Unavailable))?;

        let result = api::admin_login(&credentials).await;
        if self.mutations.try_update(|m| m.finish_login(&result)) == Some(true) {
            self.client.invalidate(QueryKey::AdminSession);
        }
        result
    }

    /// Sign out. Safe to call when already signed out.
    pub async fn logout(self) {
        if self.mutations.try_update(AdminMutationState::begin_logout) != Some(true) {
            return;
        }
        let result = api::admin_logout().await;
        if let Err(err) = &result {
            leptos::logging::warn!("admin logout failed: {err}");
        }
        if self.mutations.try_update(|m| m.finish_logout(&result)) == Some(true) {
            self.client.invalidate(QueryKey::AdminSession);
        }
    }
}

/// Register mutation state and the focus re-probe. Call once at the root.
pub fn provide_admin_session(client: QueryClient) {
    provide_context(RwSignal::new(AdminMutationState::default()));

    #[cfg(feature = "hydrate")]
    {
        let _focus = window_event_listener(leptos::ev::focus, move |_| {
            if !client.admin_session.with_untracked(|q| q.is_idle()) {
                client.invalidate(QueryKey::AdminSession);
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = client;
    }
}

pub fn use_admin_session() -> AdminHandle {
    let client = expect_context::<QueryClient>();
    client.ensure(QueryKey::AdminSession);
    AdminHandle {
        client,
        mutations: expect_context::<RwSignal<AdminMutationState>>(),
    }
}

/// Redirect to `/admin/login` whenever the probe has settled without a session.
pub fn install_admin_redirect<F>(admin: AdminHandle, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if admin.view().should_redirect_to_login() {
            navigate(ADMIN_LOGIN_PATH, NavigateOptions::default());
        }
    });
}
