//! # rental-ui
//!
//! Leptos component kit for the rental admin dashboard: buttons, avatars and
//! disclosure/accordion controls that resolve a closed set of style keys to
//! class tokens.
//!
//! ARCHITECTURE
//! ============
//! Pure resolvers (`style`, `state`, `util`) hold all decisions and are unit
//! tested without a DOM. `components` only wires them to markup and signals.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod style;
pub mod util;

/// Browser entry point: installs logging and hydrates the gallery.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        log::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
