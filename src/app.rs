//! Root application component with routing and context providers.
//!
//! Routing goes through `routes::resolve` rather than `<Routes>`: leptos_router
//! ranks routes by specificity, while the site table is matched first-to-last.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Redirect, Router};
use leptos_router::hooks::use_location;

use crate::components::{site_header::SiteHeader, toaster::Toaster};
use crate::hooks::admin::provide_admin_session;
use crate::hooks::auth::provide_auth;
use crate::hooks::query::QueryClient;
use crate::pages;
use crate::routes::{self, Target};
use crate::state::notify::NotificationState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the query cache, notification queue, and session hooks, then
/// hands the current path to the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client = QueryClient::provide();
    let notifications = RwSignal::new(NotificationState::default());
    provide_context(notifications);

    provide_auth(client, notifications);
    provide_admin_session(client);

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <RouteOutlet/>
            </main>
            <Toaster/>
        </Router>
    }
}

/// Resolve the current location against the route table and render it.
#[component]
fn RouteOutlet() -> impl IntoView {
    let location = use_location();

    move || match routes::resolve(&location.pathname.get()) {
        Target::Redirect(to) => view! { <Redirect path=to/> }.into_any(),
        Target::Page(page) => view! {
            <Title text=page.title()/>
            {pages::render(page)}
        }
        .into_any(),
    }
}
