//! Homework review payload types

use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

/// Review outcome reported by the homework API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    /// Fixed sentence sent to the chat for this verdict
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Verdict::Reviewing => "Работа взята на проверку ревьюером.",
            Verdict::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for Verdict {
    type Err = crate::HomeworkBotError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "approved" => Ok(Verdict::Approved),
            "reviewing" => Ok(Verdict::Reviewing),
            "rejected" => Ok(Verdict::Rejected),
            other => Err(crate::HomeworkBotError::Verdict(format!(
                "status '{}' is not one of approved, reviewing, rejected",
                other
            ))),
        }
    }
}

/// One submission's review snapshot as it appears on the wire.
///
/// `status` stays raw JSON: a non-string status is an unknown verdict, not a
/// malformed entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewRecord {
    #[serde(default)]
    pub homework_name: Option<String>,
    #[serde(default)]
    pub status: Option<Value>,
}

impl ReviewRecord {
    pub fn new(homework_name: &str, status: &str) -> Self {
        Self {
            homework_name: Some(homework_name.to_string()),
            status: Some(Value::String(status.to_string())),
        }
    }
}

/// Decoded body of one successful status request.
///
/// Kept as raw JSON so the interpreter can report shape problems instead of
/// the decoder rejecting the whole response.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    body: Value,
}

impl FetchResult {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// The `current_date` cursor, if the response carries an integer one
    pub fn cursor(&self) -> Option<i64> {
        self.body.get("current_date").and_then(Value::as_i64)
    }
}

impl From<Value> for FetchResult {
    fn from(body: Value) -> Self {
        Self::new(body)
    }
}
