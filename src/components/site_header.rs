//! Top navigation with the end-user session indicator.

use leptos::prelude::*;

use crate::config::api_url;
use crate::hooks::auth::use_auth;
use crate::net::api::USER_LOGOUT_PATH;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/services", "Services"),
    ("/portfolio", "Portfolio"),
    ("/contact", "Contact"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = use_auth();
    let logout_href = api_url(USER_LOGOUT_PATH);

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Folio"</a>
            <nav class="site-header__nav">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| view! { <a class="site-header__link" href=*href>{*label}</a> })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="site-header__session">
                {move || {
                    if auth.is_loading() {
                        view! { <span class="site-header__muted">"…"</span> }.into_any()
                    } else if let Some(user) = auth.user() {
                        let badge = user.user_type.map(|t| t.label());
                        let logout_href = logout_href.clone();
                        view! {
                            <span class="site-header__user">{user.display_name()}</span>
                            {badge.map(|label| view! { <span class="site-header__badge">{label}</span> })}
                            <a class="site-header__link" href=logout_href rel="external">"Sign out"</a>
                        }
                            .into_any()
                    } else {
                        view! { <a class="site-header__link" href="/login">"Sign in"</a> }.into_any()
                    }
                }}
            </div>
        </header>
    }
}
