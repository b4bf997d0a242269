mod config;
mod controller;
mod ui;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{
    config::{load_startup_config, Args, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH},
    ui::StorefrontApp,
};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let startup = load_startup_config(&args);
    tracing::info!(
        theme = ?startup.theme,
        text_scale = startup.text_scale,
        width = startup.window_width,
        height = startup.window_height,
        "starting storefront"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&startup.window_title)
            .with_inner_size([startup.window_width, startup.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };
    let app_name = startup.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |_cc| Ok(Box::new(StorefrontApp::new(&startup)))),
    )
}
