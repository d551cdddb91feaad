//! End-user session hook with staged user-type reconciliation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_auth` runs once in the root component: it starts the user probe
//! and drives the `Reconciler` from an effect on the cached user. Pages call
//! `use_auth` to read the result.
//!
//! ERROR HANDLING
//! ==============
//! A failed probe is simply "signed out". A rejected type update becomes an
//! error notification and leaves the staged value for the next load.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::hooks::query::QueryClient;
use crate::net::types::{User, UserType};
use crate::state::notify::NotificationState;
use crate::state::preference::LocalStoragePreferences;
use crate::state::query::QueryKey;
use crate::state::reconcile::{ReconcileAction, ReconcileTicket, Reconciler};

#[derive(Clone, Copy)]
pub struct AuthHandle {
    client: QueryClient,
}

impl AuthHandle {
    pub fn user(&self) -> Option<User> {
        self.client.user.with(|q| q.data.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.client.user.with(|q| q.is_loading())
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.user.with(|q| q.data.is_some())
    }
}

pub fn use_auth() -> AuthHandle {
    AuthHandle {
        client: expect_context::<QueryClient>(),
    }
}

/// Start the user probe and install the reconciliation effect.
pub fn provide_auth(client: QueryClient, notifications: RwSignal<NotificationState>) {
    let reconciler = RwSignal::new(Reconciler::default());
    client.ensure(QueryKey::CurrentUser);

    Effect::new(move || {
        let action = client.user.with(|q| {
            let mut store = LocalStoragePreferences;
            reconciler
                .try_update(|r| r.observe(q.data.as_ref(), q.is_loading(), &mut store))
                .flatten()
        });
        if let Some(ReconcileAction::UpdateUserType { ticket, user_type }) = action {
            spawn_user_type_update(client, reconciler, notifications, ticket, user_type);
        }
    });
}

fn spawn_user_type_update(
    client: QueryClient,
    reconciler: RwSignal<Reconciler>,
    notifications: RwSignal<NotificationState>,
    ticket: ReconcileTicket,
    user_type: UserType,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::hooks::notify::show_notification;
        use crate::state::notify::NotificationLevel;
        use crate::state::reconcile::Completion;

        let result = crate::net::api::update_user_type(user_type).await.map(|_| ());
        let mut store = LocalStoragePreferences;
        match reconciler.try_update(|r| r.finish(ticket, result, &mut store)) {
            Some(Completion::Applied) => client.invalidate(QueryKey::CurrentUser),
            Some(Completion::Failed(err)) => {
                leptos::logging::warn!("user type update to {user_type} failed: {err}");
                show_notification(
                    notifications,
                    NotificationLevel::Error,
                    "Couldn't save your account type",
                    &format!("{} We'll try again on your next visit.", err.user_message()),
                );
            }
            Some(Completion::Stale) | None => {
                leptos::logging::log!("ignoring user type update for an ended session");
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, reconciler, notifications, ticket, user_type);
    }
}
