//! # certify-admin
//!
//! Leptos + WASM administrative dashboard for a certificate issuance and
//! verification service.
//!
//! The crate's core is the route-level session guard: every dashboard page is
//! wrapped in `ProtectedRoute`, which validates the locally stored session
//! against the backend profile, enforces the route's allowed roles, and
//! periodically reloads the page to re-run that check.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
