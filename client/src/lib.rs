//! # client
//!
//! Leptos frontend for the DisasterAI command center dashboard: navigation,
//! hero banner, drone fleet board and AI insights panel.
//!
//! Built with `ssr` for server rendering and with `hydrate` for the WASM
//! bundle that attaches the navigation menu's event handlers.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// Hydration entry point for the WASM client.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating command center");
    leptos::mount::hydrate_body(App);
}
