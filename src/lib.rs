//! # folio
//!
//! Leptos + WASM frontend for the studio's marketing and portfolio site.
//!
//! This crate contains the route table, pages, shared components, the
//! end-user and admin session hooks, and the REST helpers they use. The
//! session and reconciliation logic lives in `state` as plain data so it can
//! be tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
