//! # client
//!
//! Leptos + WASM frontend for Daybreak: the application shell and its
//! animated light/dark theme toggler.
//!
//! The `toggle` module holds the browser-agnostic controller and is fully
//! testable natively; `util::browser` binds it to the DOM under the `hydrate`
//! feature, and `components` exposes it as Leptos components.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod toggle;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
