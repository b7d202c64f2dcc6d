use aichef_web::{App, ClientConfig};
use leptos::prelude::*;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_build_env();
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(config.log_level)
            .build(),
    );
    tracing::info!(api_base = %config.api_base, limit = config.search_limit, "Starting AIChef");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
