//! # auth-gate
//!
//! Leptos + WASM front-end that checks whether the browser already holds a
//! session with the identity service and, if not, offers a login button that
//! hands off to the service's redirect-based login flow.
//!
//! The crate contains the gate component and its page, the pure gate state
//! machine, the identity-check client, and the browser capabilities (cookie
//! reading, navigation) the gate is driven through.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
