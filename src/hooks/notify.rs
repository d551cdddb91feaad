//! Push transient notifications from anywhere below the root component.

use leptos::prelude::*;

use crate::state::notify::{NotificationLevel, NotificationState};

pub fn use_notifications() -> RwSignal<NotificationState> {
    expect_context::<RwSignal<NotificationState>>()
}

/// Show a notification and schedule its dismissal in the browser.
pub fn show_notification(
    notifications: RwSignal<NotificationState>,
    level: NotificationLevel,
    title: &str,
    message: &str,
) {
    let id = notifications.try_update(|n| n.push(level, title, message));

    #[cfg(feature = "hydrate")]
    if let Some(id) = id {
        let lifetime = std::time::Duration::from_millis(u64::from(crate::config::toast_ms()));
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(lifetime).await;
            notifications.update(|n| {
                n.dismiss(id);
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
