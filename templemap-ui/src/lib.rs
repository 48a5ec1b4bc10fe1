mod api;
mod app;
mod components;
mod config;
mod hooks;

use wasm_bindgen::prelude::*;

rust_i18n::i18n!("locales", fallback = "fr");

pub use app::App;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    rust_i18n::set_locale(config::locale());
    log::debug!("Locale {}", config::locale());
    leptos::mount_to_body(App);
}
