//! `couriers`: print the Techfix courier list in a terminal
//!
//! The API location comes from `TECHFIX_API_URL`, `TECHFIX_API_TOKEN` and
//! `TECHFIX_API_TIMEOUT_SECS`.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use techfix_couriers::{
    courier_screen, plain_text, ApiClientConfig, CourierFilter, FetchOutcome, Notice,
    NoticePresenter,
};
use tracing_subscriber::EnvFilter;

/// Print the Techfix courier list
#[derive(Parser, Debug)]
#[command(name = "couriers", version)]
struct Cli {
    /// Status filter: all, in_transit or received
    #[arg(default_value = "all")]
    filter: CourierFilter,
}

struct StderrNotices;

impl NoticePresenter for StderrNotices {
    fn present(&self, notice: Notice) {
        eprintln!("{}: {}", notice.title, notice.message);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = ApiClientConfig::from_env().context("Invalid API configuration")?;
    tracing::info!(base_url = %config.base_url, filter = %cli.filter, "Loading couriers");

    let screen = courier_screen(config, Arc::new(StderrNotices), cli.filter)
        .context("Failed to create API client")?;

    let outcome = screen.mount().await;
    print!("{}", plain_text(&screen.controller().state()));

    if let FetchOutcome::Failed(failure) = outcome {
        anyhow::bail!(failure);
    }
    Ok(())
}
