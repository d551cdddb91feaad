//! Back-office pages: sign-in form plus the guarded admin screens.
//!
//! ARCHITECTURE
//! ============
//! The resolver routes to these pages unconditionally. Guarded pages wrap
//! their content in `AdminShell`, which redirects to `/admin/login` once the
//! session probe settles without a session.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::admin_shell::AdminShell;
use crate::hooks::admin::use_admin_session;
use crate::routes::{ADMIN_DASHBOARD_PATH, Pattern, ROUTES, Target};

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let admin = use_admin_session();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Already signed in, or just signed in: go to the dashboard.
    Effect::new(move || {
        if admin.view().should_leave_login_page() {
            navigate(ADMIN_DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if admin.is_logging_in() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if admin.login(email_value, password_value).await.is_ok() {
                password.set(String::new());
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin"</h1>
                <p class="login-card__subtitle">"Sign in to manage the site"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || admin.is_logging_in()>
                        {move || if admin.is_logging_in() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                {move || admin.login_error().map(|msg| view! { <p class="login-message login-message--error">{msg}</p> })}
            </div>
        </div>
    }
}

/// Public paths listed on the dashboard.
fn public_paths() -> Vec<&'static str> {
    ROUTES
        .iter()
        .filter_map(|entry| match (entry.pattern, entry.target) {
            (Pattern::Exact(path), Target::Page(page)) if !page.is_admin() => Some(path),
            _ => None,
        })
        .collect()
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let admin = use_admin_session();

    view! {
        <AdminShell title="Dashboard">
            <p>
                "Signed in as " <strong>{move || admin.email().unwrap_or_else(|| "admin".to_owned())}</strong>
            </p>
            <h2>"Public pages"</h2>
            <ul class="admin-list">
                {public_paths()
                    .into_iter()
                    .map(|path| view! { <li><a href=path>{path}</a></li> })
                    .collect::<Vec<_>>()}
            </ul>
        </AdminShell>
    }
}

#[component]
pub fn AdminProjectsPage() -> impl IntoView {
    view! {
        <AdminShell title="Projects">
            <p>"Portfolio entries shown on the public site."</p>
        </AdminShell>
    }
}

#[component]
pub fn AdminModulesPage() -> impl IntoView {
    view! {
        <AdminShell title="Modules">
            <p>"Content blocks available to marketing pages."</p>
        </AdminShell>
    }
}

#[component]
pub fn AdminSettingsPage() -> impl IntoView {
    view! {
        <AdminShell title="Settings">
            <p>"Site-wide configuration."</p>
        </AdminShell>
    }
}
