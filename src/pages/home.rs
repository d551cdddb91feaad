//! Landing page with the personal / enterprise selector.
//!
//! Anonymous visitors stage their choice locally and continue to sign-in;
//! the auth hook applies it to the account afterwards.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::hooks::auth::use_auth;
use crate::net::types::UserType;
use crate::state::preference::{LocalStoragePreferences, stage_user_type, staged_user_type};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let staged = RwSignal::new(None);
    Effect::new(move || staged.set(staged_user_type(&LocalStoragePreferences)));

    let choose = move |user_type: UserType| {
        stage_user_type(&mut LocalStoragePreferences, user_type);
        staged.set(Some(user_type));
        navigate("/login", NavigateOptions::default());
    };
    let choose_personal = {
        let choose = choose.clone();
        move |_: leptos::ev::MouseEvent| choose(UserType::Personal)
    };
    let choose_enterprise = move |_: leptos::ev::MouseEvent| choose(UserType::Enterprise);

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Design and engineering for products that ship."</h1>
                <p class="hero__subtitle">
                    "Brand sites, web apps, and the systems behind them."
                </p>
            </section>
            <section class="audience">
                <Show
                    when=move || !auth.is_authenticated()
                    fallback=move || {
                        let label = auth
                            .user()
                            .and_then(|u| u.user_type)
                            .map_or("Not chosen yet", UserType::label);
                        view! {
                            <p class="audience__current">"Account type: " <strong>{label}</strong></p>
                        }
                    }
                >
                    <h2>"Who are you building for?"</h2>
                    <div class="audience__choices">
                        <button
                            class="btn btn--primary"
                            class:btn--selected=move || staged.get() == Some(UserType::Personal)
                            on:click=choose_personal.clone()
                        >
                            "Myself"
                        </button>
                        <button
                            class="btn btn--primary"
                            class:btn--selected=move || staged.get() == Some(UserType::Enterprise)
                            on:click=choose_enterprise.clone()
                        >
                            "My company"
                        </button>
                    </div>
                </Show>
            </section>
        </div>
    }
}
