//! # client
//!
//! Leptos + WASM front end for the Monopoly Mapper application: a theme
//! form, an editable board of color-coded property groups, and CSV/JSON
//! export.
//!
//! This crate contains pages, components, shared application state, the
//! generation API helper, and the board core: the grouping transformer,
//! board mutation operations, and the export codecs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
