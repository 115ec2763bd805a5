// src/main.rs
use anyhow::{Context, Result};
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod net;
mod state;
mod ui;

use app::DrillScanApp;
use net::client::ApiClient;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = config::Settings::load().context("Failed to load configuration")?;
    tracing::info!("Using analysis service at {}", settings.api_base_url);

    let client = ApiClient::new(&settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("DrillScan"),
        ..Default::default()
    };

    eframe::run_native(
        "DrillScan",
        options,
        Box::new(move |_cc| Box::new(DrillScanApp::new(settings, client))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
