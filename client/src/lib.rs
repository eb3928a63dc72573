//! # client
//!
//! Leptos + WASM frontend for the gym owner dashboard.
//!
//! Pages and components render the UI; `state` holds the plain state
//! machines they drive; `net` talks to the dashboard server and, through
//! the shared `gyms` client, to the gym backend.

#![recursion_limit = "256"]
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
