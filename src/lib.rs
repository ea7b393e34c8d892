//! # mercado-client
//!
//! Leptos + WASM front-end for the electricity-market results dashboard.
//! Replaces the Vue 3 `frontvue/` client with a Rust-native UI layer.
//!
//! This crate contains pages, application state, the typed route table with
//! its navigation guard, and the REST client for the market API backend.
//!
//! Browser-only code (mounting, HTTP, logging sinks) is gated behind the
//! `csr` feature so the pure logic compiles and unit-tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: set up panic reporting and logging, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App).forget();
}
