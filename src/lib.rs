//! # folio
//!
//! Leptos + WASM controller for a single-page résumé: theme switching with a
//! persisted preference, section tabs, animated skill bars, a project
//! details modal, a simulated contact form, in-browser photo replacement,
//! and pointer/scroll effects.
//!
//! Behavior lives in plain state types under `state` and browser helpers
//! under `util`; components in `components` and `pages` wire them to the
//! DOM. Everything browser-bound compiles with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
