//! Seat Console Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod listing;
mod models;
mod scoped_task;
mod seat_map;
mod seat_style;
mod session;
mod store;

use app::App;
use config::ConsoleConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ConsoleConfig::load();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] logger init failed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
