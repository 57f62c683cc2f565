//! # graphpane
//!
//! Leptos + WASM split-pane editor surface keeping a textual GraphQL schema
//! and its diagram representation synchronized. The state with real
//! invariants lives in the `editor` engine crate; this crate hosts the
//! [`components::editor::Editor`] component that owns the diagram
//! controller's lifecycle and wires DOM events into the engine, default
//! implementations of the injected collaborators, shared state structs, and
//! browser utility helpers.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Client entry point: hydrate the demo [`app::App`] into the document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
