//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the page, its components, the literal content, and
//! the two pieces of page logic: the theme preference store
//! ([`util::theme`]) and the active-section resolver
//! ([`util::section_band`]). Both are plain Rust, testable natively; the
//! browser glue is confined to `hydrate` builds.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already initialised: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
