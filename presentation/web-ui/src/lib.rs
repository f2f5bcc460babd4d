use wasm_bindgen::prelude::*;

mod config {
    pub mod api_config;
    pub mod app_config;
    pub mod display_config;
}
mod dom {
    pub mod browser;
    pub mod elements;
    pub mod list_view;
    pub mod panels;
    pub mod prompt;
}
mod setup {
    pub mod app;
    pub mod dependency_injection;
}

use config::app_config::AppConfig;
use setup::{app::App, dependency_injection::DependencyContainer};

/// Browser Entry Point
///
/// Initializes the application, wires dependencies, and mounts the catalog screen.
///
/// Layout mirrors the rest of the workspace:
/// - config/: Application configuration (API location, display, log level)
/// - setup/: Dependency injection and event wiring
/// - dom/: Browser adapters for the catalog ports
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // 1. Route panics to the console
    console_error_panic_hook::set_once();

    // 2. Load configuration from the host page
    let document = dom::browser::document().map_err(into_js)?;
    let config = AppConfig::from_page(&document);

    // 3. Initialize tracing
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.log_level)
            .build(),
    );

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config, &document).map_err(into_js)?;

    // 5. Mount the screen
    App::run(container).map_err(into_js)?;

    Ok(())
}

fn into_js(error: anyhow::Error) -> JsValue {
    tracing::error!("Catalog startup failed: {:#}", error);
    JsValue::from_str(&format!("{:#}", error))
}
