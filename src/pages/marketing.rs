//! Static marketing pages: about, services, portfolio, contact.

use leptos::prelude::*;

struct Entry {
    title: &'static str,
    summary: &'static str,
}

const SERVICES: &[Entry] = &[
    Entry {
        title: "Product design",
        summary: "Research, flows, and interface systems for web and mobile.",
    },
    Entry {
        title: "Web engineering",
        summary: "Fast, accessible sites and applications built to last.",
    },
    Entry {
        title: "Platform work",
        summary: "APIs, data pipelines, and the infrastructure underneath.",
    },
];

const PROJECTS: &[Entry] = &[
    Entry {
        title: "Harbor Analytics",
        summary: "Self-serve reporting for a logistics operator.",
    },
    Entry {
        title: "Northwind Studio",
        summary: "Portfolio and booking site for an architecture practice.",
    },
    Entry {
        title: "Ledgerline",
        summary: "Back-office tooling for a growing fintech team.",
    },
];

fn entry_grid(entries: &'static [Entry]) -> impl IntoView {
    view! {
        <div class="card-grid">
            {entries
                .iter()
                .map(|entry| {
                    view! {
                        <article class="card">
                            <h3 class="card__title">{entry.title}</h3>
                            <p class="card__summary">{entry.summary}</p>
                        </article>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"About"</h1>
            <p>
                "We are a small studio pairing designers and engineers on every engagement, "
                "from first sketch to production."
            </p>
        </div>
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Services"</h1>
            {entry_grid(SERVICES)}
        </div>
    }
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Portfolio"</h1>
            {entry_grid(PROJECTS)}
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Contact"</h1>
            <p>"Tell us about your project and we'll reply within two business days."</p>
            <a class="btn btn--primary" href="mailto:hello@folio.example">"hello@folio.example"</a>
        </div>
    }
}
