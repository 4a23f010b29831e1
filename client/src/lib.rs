//! # site
//!
//! Leptos + WASM frontend for the painting company website: public pages plus
//! the token-gated admin area (login, leads, pricing).
//!
//! Everything about the admin session that is not presentation lives in the
//! `admin-session` crate; this crate supplies the browser pieces it needs
//! (`localStorage` store, `gloo-net` transport) and the pages.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
