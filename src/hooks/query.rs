//! Signal-backed query cache shared through context.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `QueryClient` is provided by the root component. Hooks read its
//! signals; mutations call `invalidate` after their own success handling so
//! the re-fetch is always scheduled last.

use std::future::Future;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{AdminSession, User};
use crate::state::query::{QueryKey, QueryState};

#[derive(Clone, Copy)]
pub struct QueryClient {
    pub user: RwSignal<QueryState<User>>,
    pub admin_session: RwSignal<QueryState<AdminSession>>,
}

impl QueryClient {
    /// Create the cache and register it as context.
    pub fn provide() -> Self {
        let client = Self {
            user: RwSignal::new(QueryState::default()),
            admin_session: RwSignal::new(QueryState::default()),
        };
        provide_context(client);
        client
    }

    /// Mark `key` stale and re-fetch it. Older in-flight responses for the
    /// same key will be discarded.
    pub fn invalidate(self, key: QueryKey) {
        match key {
            QueryKey::CurrentUser => run_query(key, self.user, api::fetch_current_user),
            QueryKey::AdminSession => run_query(key, self.admin_session, api::fetch_admin_session),
        }
    }

    /// Fetch `key` unless it has been requested before.
    pub fn ensure(self, key: QueryKey) {
        let idle = match key {
            QueryKey::CurrentUser => self.user.with_untracked(|q| q.is_idle()),
            QueryKey::AdminSession => self.admin_session.with_untracked(|q| q.is_idle()),
        };
        if idle {
            self.invalidate(key);
        }
    }
}

fn run_query<T, F, Fut>(key: QueryKey, signal: RwSignal<QueryState<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let Some(ticket) = signal.try_update(|q| q.begin_fetch()) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fetch().await;
        if signal.try_update(|q| q.resolve(ticket, result)) != Some(true) {
            leptos::logging::log!("discarded stale response for {}", key.endpoint());
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, ticket, fetch);
    }
}
