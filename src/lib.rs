//! # chadbot-client
//!
//! Leptos + WASM frontend for the Amigo Chad-Bot study-guide assistant.
//! Thin views over a REST backend (`/api/auth/*`, `/api/users/*`,
//! `/api/documents/*`); the load-bearing piece is the session store in
//! [`state::session`], which owns authentication state and the persisted
//! bearer credentials, with the authenticated HTTP client in [`net::api`]
//! alongside it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client-side entry point: wire up panic reporting and logging, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
