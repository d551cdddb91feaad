//! Layout shared by the signed-in admin pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each guarded page wraps its content in `AdminShell`, which installs the
//! redirect to `/admin/login` and withholds children until a session is
//! confirmed.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::hooks::admin::{install_admin_redirect, use_admin_session};

const ADMIN_LINKS: &[(&str, &str)] = &[
    ("/admin/dashboard", "Dashboard"),
    ("/admin/projects", "Projects"),
    ("/admin/modules", "Modules"),
    ("/admin/settings", "Settings"),
];

#[component]
pub fn AdminShell(title: &'static str, children: ChildrenFn) -> impl IntoView {
    let admin = use_admin_session();
    install_admin_redirect(admin, use_navigate());

    let on_logout = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(admin.logout());
    };

    view! {
        <div class="admin-shell">
            <aside class="admin-shell__sidebar">
                <p class="admin-shell__brand">"Folio Admin"</p>
                <nav class="admin-shell__nav">
                    {ADMIN_LINKS
                        .iter()
                        .map(|(href, label)| view! { <a class="admin-shell__link" href=*href>{*label}</a> })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="admin-shell__account">
                    <span class="admin-shell__email">{move || admin.email().unwrap_or_default()}</span>
                    <button
                        class="btn"
                        on:click=on_logout
                        disabled=move || admin.is_logging_out()
                    >
                        "Sign out"
                    </button>
                </div>
            </aside>
            <section class="admin-shell__content">
                <h1>{title}</h1>
                <Show
                    when=move || admin.is_authenticated()
                    fallback=|| view! { <p class="admin-shell__muted">"Checking session..."</p> }
                >
                    {children()}
                </Show>
            </section>
        </div>
    }
}
