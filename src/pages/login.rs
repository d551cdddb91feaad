//! End-user sign-in page. Authentication itself happens at the identity
//! provider behind `/api/login`; this page only links there.

use leptos::prelude::*;

use crate::config::api_url;
use crate::hooks::auth::use_auth;
use crate::net::api::USER_LOGIN_PATH;
use crate::net::types::UserType;
use crate::state::preference::{LocalStoragePreferences, staged_user_type};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let login_href = api_url(USER_LOGIN_PATH);
    // Read after hydration so server and client markup agree.
    let staged = RwSignal::new(None);
    Effect::new(move || staged.set(staged_user_type(&LocalStoragePreferences)));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                {move || {
                    staged
                        .get()
                        .map(|t: UserType| {
                            view! {
                                <p class="login-card__subtitle">
                                    "Continuing as " <strong>{t.label()}</strong>
                                </p>
                            }
                        })
                }}
                <Show
                    when=move || !auth.is_authenticated()
                    fallback=|| {
                        view! {
                            <p class="login-message">"You're signed in."</p>
                            <a class="login-button" href="/">"Back to home"</a>
                        }
                    }
                >
                    <a class="login-button" href=login_href.clone() rel="external">
                        "Continue to sign in"
                    </a>
                </Show>
            </div>
        </div>
    }
}
