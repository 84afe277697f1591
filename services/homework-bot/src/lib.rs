//! Homework bot - review status watcher
//!
//! Polls the Practicum homework API, detects review status changes, and
//! forwards each new verdict to a Telegram chat.

pub mod config;
pub mod engine;
pub mod error;
pub mod fetcher;
pub mod homework;
pub mod interpreter;
pub mod io;
pub mod notifier;
pub mod practicum;
pub mod state;
pub mod telegram;

pub use config::{load_config, Config, Credentials};
pub use error::{HomeworkBotError, Result};

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::engine::Engine;
use crate::fetcher::StatusFetcher;
use crate::io::{HttpClient, ReqwestHttpClient};
use crate::notifier::Notifier;
use crate::practicum::PracticumClient;
use crate::state::PollState;
use crate::telegram::TelegramNotifier;

/// Assemble the engine from configuration, credentials, and an HTTP client
pub fn build_engine(
    config: &Config,
    credentials: &Credentials,
    http: Arc<dyn HttpClient>,
    cancel: CancellationToken,
) -> Engine {
    let fetcher: Arc<dyn StatusFetcher> = Arc::new(PracticumClient::new(
        &config.endpoint,
        &credentials.practicum_token,
        Arc::clone(&http),
    ));
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(
        &config.telegram_api_url,
        &credentials.telegram_token,
        &credentials.telegram_chat_id,
        http,
    ));

    Engine::new(
        fetcher,
        notifier,
        PollState::starting_now(),
        config.retry_period(),
        cancel,
    )
}

/// Run the bot until Ctrl-C
pub async fn run(config: Config, credentials: Credentials) -> Result<()> {
    credentials.require()?;
    config.validate()?;

    let http: Arc<dyn HttpClient> =
        Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout())?);
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let mut engine = build_engine(&config, &credentials, http, cancel);

    tracing::info!("Homework bot started");
    engine.run().await;
    tracing::info!("Homework bot stopped");

    Ok(())
}
