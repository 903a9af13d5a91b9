//! # wordbench-client
//!
//! Leptos + WASM management console for the word and combination dataset.
//!
//! This crate contains the console page, its panels and components, the
//! per-panel state models, and the REST client for the `/api` collaborator.
//! The `ssr` build renders the shell on the server; the `hydrate` build takes
//! over in the browser and performs all network calls.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
