//! # client
//!
//! Leptos + WASM frontend for Snapgram, a photo-sharing web client backed by
//! a hosted document/storage service.
//!
//! This crate contains pages, components, the session state machine, the
//! route guard, form validation, and the typed REST client. Server-side it
//! is rendered by the `snapgram` host; in the browser [`hydrate`] takes over.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// Browser entry point: install logging, then hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
