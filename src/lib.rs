pub mod api;
pub mod app;
pub mod client;
pub mod components;
#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod submission;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
