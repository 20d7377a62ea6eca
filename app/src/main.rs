//! Verdant marketing site — wasm entry point.

use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

mod api;
mod app;
mod components;
mod effects;
mod types;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(app::App);
}
