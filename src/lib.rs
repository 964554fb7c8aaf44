//! # outcomes-admin
//!
//! Leptos + WASM administrative front end for the outcome-tracking system
//! (courses, Course Learning Outcomes, Program Outcome mappings).
//!
//! This crate contains the session store, the authenticated REST client,
//! role-gated routing, pages, and the shared components they render.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
