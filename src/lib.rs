//! # campus-client
//!
//! Leptos + WASM frontend for the university administration backend.
//! Authenticated staff manage faculties, majors, and classes through
//! paginated CRUD screens backed by the campus REST API.
//!
//! The crate splits into pages, reusable components, application state
//! (the resource controller and session guard), network types and HTTP
//! helpers, and small browser utilities. Everything browser-specific is
//! gated behind the `hydrate` feature so state logic stays testable on
//! the host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
