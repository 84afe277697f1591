//! Configuration and credentials for the homework bot

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Non-secret service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,
    #[serde(default = "default_retry_period")]
    pub retry_period_seconds: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            telegram_api_url: default_telegram_api_url(),
            retry_period_seconds: default_retry_period(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl Config {
    pub fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Reject settings that would make the poll loop spin or every request time out
    pub fn validate(&self) -> crate::Result<()> {
        if self.retry_period_seconds == 0 {
            return Err(crate::HomeworkBotError::Config(
                "retry_period_seconds must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_seconds == 0 {
            return Err(crate::HomeworkBotError::Config(
                "request_timeout_seconds must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

fn default_telegram_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_retry_period() -> u64 {
    600
}

fn default_request_timeout() -> u64 {
    30
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::HomeworkBotError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content).map_err(|e| {
        crate::HomeworkBotError::Config(format!("Failed to parse config file {:?}: {}", path, e))
    })?;
    config.validate()?;
    Ok(config)
}

/// Secrets supplied through the process environment
#[derive(Clone, Default)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("missing", &self.missing())
            .finish()
    }
}

impl Credentials {
    /// Read credentials from the environment. Unset variables become empty strings
    /// so that the gate in [`Credentials::validate`] can report them.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            practicum_token: lookup(PRACTICUM_TOKEN_VAR).unwrap_or_default(),
            telegram_token: lookup(TELEGRAM_TOKEN_VAR).unwrap_or_default(),
            telegram_chat_id: lookup(TELEGRAM_CHAT_ID_VAR).unwrap_or_default(),
        }
    }

    /// True only when every credential is non-empty
    pub fn validate(&self) -> bool {
        self.missing().is_empty()
    }

    /// Names of the environment variables that are absent or empty
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (PRACTICUM_TOKEN_VAR, &self.practicum_token),
            (TELEGRAM_TOKEN_VAR, &self.telegram_token),
            (TELEGRAM_CHAT_ID_VAR, &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Gate variant of [`Credentials::validate`] that names what is missing
    pub fn require(&self) -> crate::Result<()> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(crate::HomeworkBotError::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )))
        }
    }
}
