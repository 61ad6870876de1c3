use anyhow::{Context, Result};
use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};
use todoboard::config::BoardConfig;
use todoboard::ui_dioxus::App;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = BoardConfig::from_env().context("Failed to read board configuration")?;
    info!(endpoint = %config.endpoint, "Starting todo board");

    let window = WindowBuilder::new()
        .with_title(config.window_title.clone())
        .with_resizable(true);

    // Launch the Dioxus desktop app
    LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .launch(App);

    Ok(())
}
