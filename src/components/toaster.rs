//! Fixed-position stack of transient notifications.

use leptos::prelude::*;

use crate::hooks::notify::use_notifications;
use crate::state::notify::NotificationLevel;

#[component]
pub fn Toaster() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                notifications
                    .get()
                    .items()
                    .iter()
                    .cloned()
                    .map(|note| {
                        let id = note.id;
                        let class = match note.level {
                            NotificationLevel::Info => "toast",
                            NotificationLevel::Error => "toast toast--error",
                        };
                        view! {
                            <div class=class>
                                <strong class="toast__title">{note.title}</strong>
                                <p class="toast__message">{note.message}</p>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| {
                                        notifications.update(|n| {
                                            n.dismiss(id);
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
