//! # client
//!
//! Leptos + WASM frontend for Civic Connect.
//!
//! This crate contains pages, components, and the session context that wires
//! the `session` crate's store and guards into Leptos. Browser-only glue
//! (`sessionStorage`, window navigation, console logging) sits behind the
//! `hydrate` feature; the `ssr` build renders the same components on the
//! server in their loading state.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
