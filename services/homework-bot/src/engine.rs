//! Engine: the fetch, interpret, notify polling loop

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::fetcher::StatusFetcher;
use crate::interpreter;
use crate::notifier::{self, Notifier};
use crate::state::{PollState, FAILURE_WARNING_THRESHOLD};
use crate::HomeworkBotError;

/// What a successful cycle did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new verdict was handed to the notifier
    Notified(String),
    /// The verdict matched the last one sent
    Unchanged,
}

/// The engine owns the poll state and drives one cycle per retry period
#[derive(Debug)]
pub struct Engine {
    fetcher: Arc<dyn StatusFetcher>,
    notifier: Arc<dyn Notifier>,
    state: PollState,
    retry_period: Duration,
    cancel: CancellationToken,
}

impl Engine {
    pub fn new(
        fetcher: Arc<dyn StatusFetcher>,
        notifier: Arc<dyn Notifier>,
        state: PollState,
        retry_period: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            fetcher,
            notifier,
            state,
            retry_period,
            cancel,
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Run one fetch, validate, notify pass.
    ///
    /// The cursor is advanced as soon as a response arrives, before the
    /// payload is validated.
    pub async fn run_cycle(&mut self) -> crate::Result<CycleOutcome> {
        let result = self.fetcher.fetch(self.state.timestamp).await?;

        if let Some(cursor) = result.cursor() {
            self.state.timestamp = cursor;
        }

        interpreter::validate(&result)?;
        let record = interpreter::first_record(&result)?;
        let message = interpreter::extract_verdict(&record)?;

        if !self.state.is_new_message(&message) {
            tracing::debug!("Status unchanged: {}", message);
            return Ok(CycleOutcome::Unchanged);
        }

        notifier::notify(self.notifier.as_ref(), &message).await;
        self.state.record_notified(message.clone());
        Ok(CycleOutcome::Notified(message))
    }

    /// Run one cycle and absorb any failure into the log
    pub async fn poll_once(&mut self) {
        match self.run_cycle().await {
            Ok(outcome) => {
                self.state.record_success();
                tracing::debug!(
                    "Cycle finished: {:?} (next from_date={})",
                    outcome,
                    self.state.timestamp
                );
            }
            Err(HomeworkBotError::Shape(detail)) if detail == interpreter::NO_HOMEWORKS => {
                // Quiet cycle: the failure run neither grows nor resets
                tracing::debug!("Сбой в работе программы: {}", detail);
            }
            Err(e) => self.record_failure(&e),
        }
    }

    fn record_failure(&mut self, err: &HomeworkBotError) {
        let failures = self.state.record_failure();

        match err {
            HomeworkBotError::Connectivity(_) | HomeworkBotError::Http(_) => {
                tracing::warn!("Сбой в работе программы: {}", err)
            }
            HomeworkBotError::Shape(_) | HomeworkBotError::Verdict(_) => {
                tracing::error!("Сбой в работе программы: {}", err)
            }
            HomeworkBotError::Delivery(_)
            | HomeworkBotError::Config(_)
            | HomeworkBotError::Io(_) => {
                tracing::error!("Unexpected failure in poll cycle: {}", err)
            }
        }

        if failures == FAILURE_WARNING_THRESHOLD {
            tracing::warn!("{} consecutive poll cycles have failed", failures);
        }
    }

    /// Poll until the cancellation token is triggered
    pub async fn run(&mut self) {
        tracing::info!(
            "Polling every {:?} starting from {}",
            self.retry_period,
            self.state.timestamp
        );

        loop {
            self.poll_once().await;

            tokio::select! {
                _ = tokio::time::sleep(self.retry_period) => {}
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Polling loop cancelled");
                    break;
                }
            }
        }
    }
}
