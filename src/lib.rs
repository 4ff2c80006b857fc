//! Threads web client - signup screen
//!
//! A Leptos application that lets a new user create an account and keeps the
//! returned session, with an axum host serving the signup API in development.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
