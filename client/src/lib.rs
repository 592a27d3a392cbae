//! # client
//!
//! Leptos + WASM frontend for the Gatehouse auth screens.
//!
//! This crate contains the sign-in/sign-up pages, the submission controller
//! they share (`auth`), session state, and the HTTP client for the identity
//! backend. The `server` crate renders it with SSR; the browser hydrates it
//! through `hydrate()`.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
