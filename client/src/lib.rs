//! # client
//!
//! Leptos + WASM frontend for the job board.
//!
//! This crate contains pages, components, the session provider, the route
//! guard engine and the REST client. The `ssr` build is rendered by the
//! `server` crate; the `hydrate` build runs in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
