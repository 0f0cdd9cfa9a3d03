//! Inline Confirmation Demo Entry Point

mod models;
mod config;
mod components;
mod app;

use app::App;
use config::DemoConfig;
use leptos::prelude::*;

fn main() {
    let config = DemoConfig::load();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    }

    // Plain HTML usage in index.html needs the custom element
    if let Err(err) = inline_confirmation::define() {
        log::error!("Failed to register <{}>: {}", inline_confirmation::TAG_NAME, err);
    }

    mount_to_body(move || view! { <App config=config /> });
}
