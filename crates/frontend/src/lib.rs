pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = shared::config::load_config();
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(shared::config::log_level(&loaded.config));
    for (level, note) in &loaded.notes {
        log::log!(*level, "{}", note);
    }

    let config = loaded.config;
    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}
