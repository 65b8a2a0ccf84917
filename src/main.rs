#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use seo_master::{lifecycle, views::App};

fn main() {
    lifecycle::init_logging();
    tracing::info!("Starting SEO Master");
    dioxus::launch(App);
}
