//! Poll loop state

use std::time::{SystemTime, UNIX_EPOCH};

/// Failed cycles in a row after which a warning is logged
pub const FAILURE_WARNING_THRESHOLD: u32 = 5;

/// State carried from one poll cycle to the next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// Lower bound (seconds since epoch) for the next status request
    pub timestamp: i64,
    /// Last message handed to the notifier, empty before the first one
    pub last_notified_message: String,
    pub consecutive_failures: u32,
}

impl PollState {
    pub fn new(timestamp: i64) -> Self {
        Self {
            timestamp,
            last_notified_message: String::new(),
            consecutive_failures: 0,
        }
    }

    /// Start from the current wall-clock time
    pub fn starting_now() -> Self {
        Self::new(current_epoch_secs())
    }

    /// Whether `message` differs from the last one sent
    pub fn is_new_message(&self, message: &str) -> bool {
        self.last_notified_message != message
    }

    pub fn record_notified(&mut self, message: String) {
        self.last_notified_message = message;
    }

    /// Count a failed cycle, returning the new run length
    pub fn record_failure(&mut self) -> u32 {
        self.consecutive_failures += 1;
        self.consecutive_failures
    }

    pub fn record_success(&mut self) {
        self.consecutive_failures = 0;
    }
}

fn current_epoch_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
