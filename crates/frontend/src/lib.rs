pub mod app;
pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = shared::config::load_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(shared::config::startup_level(&loaded));
    console_error_panic_hook::set_once();

    shared::config::install(loaded);

    log::info!(
        "product form starting, api base: {:?}",
        shared::api_utils::api_base()
    );
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
