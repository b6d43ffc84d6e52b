pub mod app;
pub mod dashboards;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::shared::config::{load_config, AppConfig};

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.level());
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::warn!("Invalid embedded config, using defaults: {}", e);
    }

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
