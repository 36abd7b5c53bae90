//! FX Blotter TUI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use service_tui::prelude::*;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// FX options trade blotter
#[derive(Parser)]
#[command(name = "fxblotter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "fxblotter.toml")]
    config: String,

    /// Trade feed endpoint, overriding configuration and environment
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Write tracing output to this file (off by default)
    #[arg(long)]
    log_file: Option<String>,
}

fn init_file_tracing(path: &str, log_level: &str) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to open log file {}", path))?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config file, then environment, then CLI flags
    let mut config = BlotterConfig::load_or_default(Path::new(&cli.config))?.with_env_override();
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    config.validate()?;

    // Tracing stays off without --log-file: the TUI owns the terminal,
    // so log lines would corrupt the display.
    if let Some(path) = &cli.log_file {
        init_file_tracing(path, &config.log_level)?;
    }
    info!(
        endpoint = %config.endpoint,
        tick_millis = config.tick_millis,
        "starting FX options blotter"
    );

    // The fetch starts before the terminal takes over, so the feed
    // answers while the loading screen is up.
    let feed_rx = spawn_feed_fetch(FeedClient::new(config.endpoint.clone()));
    let mut app = BlotterApp::new(feed_rx);

    let mut tui = Tui::new()?;
    tui.run(&mut app, Duration::from_millis(config.tick_millis))
        .await?;

    Ok(())
}
