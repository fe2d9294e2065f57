//! Cliente Admin Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod models;
mod store;

use app::App;
use leptos::prelude::*;
use log::{Level, LevelFilter};
use rolling_logger::{LogLine, LoggerConfig};

fn console_sink(line: &LogLine) {
    let text: wasm_bindgen::JsValue = line.text.as_str().into();
    match line.level {
        Level::Error => web_sys::console::error_1(&text),
        Level::Warn => web_sys::console::warn_1(&text),
        _ => web_sys::console::log_1(&text),
    }
}

/// Lines kept for the in-app log panel
const LOG_LINES: usize = 200;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    let config = LoggerConfig::new("cliente-admin")
        .with_capacity(LOG_LINES)
        .with_level(level);
    let log_buffer = match rolling_logger::init_logger(config, Some(Box::new(console_sink))) {
        Ok(buffer) => Some(buffer),
        Err(e) => {
            web_sys::console::warn_1(&e.to_string().into());
            None
        }
    };

    mount_to_body(move || view! { <App log_buffer=log_buffer.clone() /> });
}
