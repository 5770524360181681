//! Bookmark Tree Frontend Entry Point

mod models;
mod ids;
mod error;
mod events;
mod editor;
mod drag;
mod tree;
mod config;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
