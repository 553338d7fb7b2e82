//! # client
//!
//! Leptos + WASM frontend for the EduBridge tutor marketplace.
//!
//! This crate contains pages, components, the session/auth state that gates
//! protected routes, and typed clients for the REST backend and the identity
//! provider. The `ssr` feature is consumed by the axum host; `hydrate` builds
//! the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
