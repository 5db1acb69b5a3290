//! Client-side enhancement layer for the Bricks & Keys marketing site.
//!
//! SYSTEM CONTEXT
//! ==============
//! Theme switching, the mobile menu, the scroll indicator, lazy images,
//! scroll reveals, the FAQ accordion, and contact form validation all hang
//! off one hydrated Leptos app. Logical state lives in `state` and drives
//! rendering; `util` isolates the browser glue behind the `hydrate` feature
//! so the core compiles and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wire up logging and hydrate the static page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
