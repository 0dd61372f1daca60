//! # client
//!
//! Leptos + WASM frontend for the clinical evaluation wizard.
//!
//! The crate holds the patient dashboard and the three wizard steps
//! (diagnosis, exam/test suggestions, summary). Step logic lives in `state`
//! as plain reducers so it can be tested without a browser; `pages` wire
//! those reducers to the DOM and `net` talks to the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
