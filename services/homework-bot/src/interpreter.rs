//! Shape checks and verdict extraction for homework status responses

use serde_json::Value;

use crate::homework::{FetchResult, ReviewRecord, Verdict};
use crate::HomeworkBotError;

/// Check that a response has the documented top-level structure
pub fn validate(result: &FetchResult) -> crate::Result<()> {
    let body = result
        .body()
        .as_object()
        .ok_or_else(|| HomeworkBotError::Shape("response is not a JSON object".to_string()))?;

    match body.get("homeworks") {
        None => {
            return Err(HomeworkBotError::Shape(
                "response has no 'homeworks' field".to_string(),
            ))
        }
        Some(Value::Array(_)) => {}
        Some(other) => {
            return Err(HomeworkBotError::Shape(format!(
                "'homeworks' must be a list, got {}",
                json_kind(other)
            )))
        }
    }

    match body.get("current_date") {
        None | Some(Value::Null) => Err(HomeworkBotError::Shape(
            "response has no 'current_date' value".to_string(),
        )),
        Some(date) if date.as_i64().is_some() => Ok(()),
        Some(other) => Err(HomeworkBotError::Shape(format!(
            "'current_date' must be an integer, got {}",
            json_kind(other)
        ))),
    }
}

/// Shape error detail for a response with nothing reported since the cursor
pub const NO_HOMEWORKS: &str = "no homeworks present";

/// The most recent submission, i.e. element 0 of `homeworks`.
///
/// Call after [`validate`]; an empty list is reported as a shape error.
pub fn first_record(result: &FetchResult) -> crate::Result<ReviewRecord> {
    let first = result
        .body()
        .get("homeworks")
        .and_then(Value::as_array)
        .ok_or_else(|| HomeworkBotError::Shape("'homeworks' is not a list".to_string()))?
        .first()
        .ok_or_else(|| HomeworkBotError::Shape(NO_HOMEWORKS.to_string()))?;

    if !first.is_object() {
        return Err(HomeworkBotError::Shape(format!(
            "homework entry must be an object, got {}",
            json_kind(first)
        )));
    }

    serde_json::from_value(first.clone())
        .map_err(|e| HomeworkBotError::Shape(format!("malformed homework entry: {}", e)))
}

/// Build the chat message for a record
pub fn extract_verdict(record: &ReviewRecord) -> crate::Result<String> {
    let verdict: Verdict = match &record.status {
        None | Some(Value::Null) => {
            return Err(HomeworkBotError::Verdict(
                "homework has no status".to_string(),
            ))
        }
        Some(Value::String(status)) => status.parse()?,
        Some(other) => {
            return Err(HomeworkBotError::Verdict(format!(
                "status {} is not one of approved, reviewing, rejected",
                other
            )))
        }
    };

    let name = record
        .homework_name
        .as_deref()
        .ok_or_else(|| HomeworkBotError::Shape("homework has no 'homework_name'".to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        verdict.message()
    ))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
