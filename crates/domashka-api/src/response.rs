//! Shape validation and status interpretation for API payloads.
//!
//! The endpoint answers with `{"homeworks": [...], "current_date": <i64>}`,
//! homeworks most-recent-first. Nothing here does I/O.

use domashka_core::{error::BotError, verdict::verdict_for};
use serde_json::Value;
use tracing::debug;

/// Validate the decoded payload against the expected shape.
///
/// Pure precondition check: the payload must be an object carrying a
/// `homeworks` array and a `current_date` key. No transformation on success.
pub fn check_response(payload: &Value) -> Result<(), BotError> {
    let obj = payload
        .as_object()
        .ok_or_else(|| BotError::Shape("response is not an object".to_string()))?;

    let homeworks = obj
        .get("homeworks")
        .ok_or_else(|| BotError::Shape("missing key `homeworks`".to_string()))?;
    if !homeworks.is_array() {
        return Err(BotError::Shape("`homeworks` is not an array".to_string()));
    }
    if !obj.contains_key("current_date") {
        return Err(BotError::Shape("missing key `current_date`".to_string()));
    }

    debug!("API response shape is valid");
    Ok(())
}

/// Render the notification message for one homework record.
///
/// Pure: fails with `MissingField` when `homework_name` or `status` is
/// absent (or not a string), and with `UnknownVerdict` when the status is
/// outside the documented set.
pub fn parse_status(homework: &Value) -> Result<String, BotError> {
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(BotError::MissingField("homework_name"))?;
    let status = homework
        .get("status")
        .and_then(Value::as_str)
        .ok_or(BotError::MissingField("status"))?;

    let verdict =
        verdict_for(status).ok_or_else(|| BotError::UnknownVerdict(status.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}

/// The most recent homework record, if any.
///
/// Call after `check_response`; a missing or non-array `homeworks` reads as
/// no new work.
pub fn first_homework(payload: &Value) -> Option<&Value> {
    payload.get("homeworks")?.as_array()?.first()
}

/// The next poll cursor: the server's echoed `current_date` when it is an
/// integer, otherwise `prior` unchanged. The cursor is never computed
/// locally, to stay consistent with the server's clock.
pub fn next_cursor(payload: &Value, prior: i64) -> i64 {
    payload
        .get("current_date")
        .and_then(Value::as_i64)
        .unwrap_or(prior)
}
