//! Homework bot CLI
//!
//! Command-line entry point for the review status watcher.

use std::path::PathBuf;

use clap::Parser;
use homework_bot::{load_config, Config, Credentials};
use tracing::Level;

#[derive(Parser)]
#[command(name = "homework-bot")]
#[command(about = "Watches homework review status and reports changes to Telegram")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seconds between status requests (overrides config file)
    #[arg(long)]
    retry_period: Option<u64>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }

    let credentials = Credentials::from_env();
    if !credentials.validate() {
        tracing::error!(
            "Отсутствует один из обязательных токенов: {}",
            credentials.missing().join(", ")
        );
        std::process::exit(1);
    }

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(retry_period) = args.retry_period {
        config.retry_period_seconds = retry_period;
    }
    config.validate()?;

    tracing::debug!(
        "Endpoint: {}, retry period: {}s, request timeout: {}s",
        config.endpoint,
        config.retry_period_seconds,
        config.request_timeout_seconds
    );

    homework_bot::run(config, credentials).await?;

    Ok(())
}
