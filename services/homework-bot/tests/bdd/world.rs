//! BDD test world for the homework bot

use std::sync::Arc;

use cucumber::World;
use homework_bot::engine::{CycleOutcome, Engine};
use homework_bot::homework::FetchResult;
use homework_bot::notifier::Notifier;
use homework_bot::Credentials;
use serde_json::Value;
use tokio::sync::RwLock;

#[derive(Debug, Default, World)]
pub struct HomeworkBotWorld {
    // Credential gate
    pub credentials: Option<Credentials>,
    pub gate_passed: Option<bool>,

    // Interpretation
    pub response: Option<FetchResult>,
    pub validation_result: Option<homework_bot::Result<()>>,
    pub verdict_result: Option<homework_bot::Result<String>>,

    // Notifier testing
    pub notifier: Option<Box<dyn Notifier>>,
    pub notification_result: Option<homework_bot::Result<()>>,

    // Poll loop testing
    pub scripted_responses: Vec<homework_bot::Result<Value>>,
    pub chat_unreachable: bool,
    pub engine: Option<Engine>,
    pub sent_messages: Arc<RwLock<Vec<String>>>,
    pub cycle_results: Vec<homework_bot::Result<CycleOutcome>>,

    // Binary lifecycle
    pub work_dir: Option<tempfile::TempDir>,
    pub process_env: Vec<(String, String)>,
    pub process_args: Vec<String>,
    pub exit_code: Option<i32>,
    pub process_output: String,
}
