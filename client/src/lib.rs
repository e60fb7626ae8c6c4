//! # homeboard-client
//!
//! Leptos + WASM frontend for the Homeboard personal dashboard.
//!
//! This crate contains the route pages, the auth-gated page shell, the
//! Books/Links/Notes/DateTime widgets, session state, and the REST client.
//! The `homeboard` server renders it with SSR and the browser hydrates it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
