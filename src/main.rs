//! Widgets Demo Entry Point

mod app;
mod components;
mod config;
mod fragment;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load();
    let config = loaded.clone().unwrap_or_default();
    console_logger::init(&config.log_level);
    if let Err(err) = &loaded {
        tracing::warn!(%err, "invalid widgets config, using defaults");
    }

    let rescan_event = config.rescan_event.clone();
    mount_to_body(move || view! { <App rescan_event=rescan_event.clone() /> });

    // Mounting is synchronous, the markup is in the document now.
    match dom_widgets::enhance_document(&config) {
        Ok(enhanced) => tracing::info!(
            counters = enhanced.counters,
            menus = enhanced.menus,
            "page enhanced"
        ),
        Err(err) => tracing::error!(%err, "page not enhanced"),
    }
    if let Err(err) = dom_widgets::listen_for_content(&config) {
        tracing::error!(%err, "inserted content will not be enhanced");
    }
}
