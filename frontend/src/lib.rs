use std::sync::Once;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod test_support;
pub mod utils;

static STARTED: Once = Once::new();

/// Resolves the runtime config before `mount` runs, so the first render
/// already reads configured values through `config::current()`.
pub async fn boot(mount: impl FnOnce()) {
    config::init().await;
    mount();
}

/// Installs logging, then loads config and mounts the app. Idempotent.
pub fn run() {
    STARTED.call_once(|| {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("Logger already set: {}", err).into());
        }
        log::info!("Starting {}", components::layout::APP_NAME);

        // window.__PORTAL_ENV / __PORTAL_CONFIG take precedence over ./config.json.
        wasm_bindgen_futures::spawn_local(boot(router::mount_app));
    });
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    run();
}
