#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use anyhow::Result;
use clap::Parser;
use gcloud_guard::config::Config;
use gcloud_guard::error::{ConfigError, GuardError};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod app;
mod cli;

use cli::commands::Cli;

/// Load, override and validate the config. A config that fails here never
/// admits a command.
fn load_config(cli: &Cli) -> Result<Config, GuardError> {
    let mut config = match &cli.config {
        Some(path) => {
            Config::load_from(path).map_err(|e| ConfigError::Load(format!("{e:#}")))?
        }
        None => Config::load_or_init()?,
    };
    config.apply_env_overrides();
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // Logs go to stderr; stdout carries command output only.
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config.observability.level().unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    app::dispatch::dispatch(cli, Arc::new(config)).await
}
