//! # client
//!
//! Leptos + WASM front end for the Teaching Notes guardian portal.
//!
//! Pages render on the server (`ssr`) and hydrate in the browser
//! (`hydrate`). Network calls only happen on the hydrated side; the SSR
//! build compiles them as stubs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the already-rendered page to the reactive runtime.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
