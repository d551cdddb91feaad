//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome to
//! `components`. `render` maps a resolved `Page` to its component.

pub mod admin;
pub mod home;
pub mod login;
pub mod marketing;
pub mod not_found;

use leptos::prelude::*;

use crate::routes::Page;
use admin::{AdminDashboardPage, AdminLoginPage, AdminModulesPage, AdminProjectsPage, AdminSettingsPage};
use home::HomePage;
use login::LoginPage;
use marketing::{AboutPage, ContactPage, PortfolioPage, ServicesPage};
use not_found::NotFoundPage;

/// Render the component for a resolved page.
pub fn render(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::About => view! { <AboutPage/> }.into_any(),
        Page::Services => view! { <ServicesPage/> }.into_any(),
        Page::Portfolio => view! { <PortfolioPage/> }.into_any(),
        Page::Contact => view! { <ContactPage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::AdminLogin => view! { <AdminLoginPage/> }.into_any(),
        Page::AdminDashboard => view! { <AdminDashboardPage/> }.into_any(),
        Page::AdminProjects => view! { <AdminProjectsPage/> }.into_any(),
        Page::AdminModules => view! { <AdminModulesPage/> }.into_any(),
        Page::AdminSettings => view! { <AdminSettingsPage/> }.into_any(),
        Page::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
