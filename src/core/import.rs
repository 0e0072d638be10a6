//! Import gate for a JSON payload replacing the whole collection.
//!
//! Validation is shape/range only, run on the raw JSON value before any
//! typed decode. It deliberately does not check id uniqueness, date
//! parseability or description non-emptiness; a payload that passes the gate
//! but fails the typed decode is still rejected wholesale.

use crate::core::transform::sort_by_date;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use serde_json::Value;

/// True iff the payload is an array whose every element carries `id`,
/// `description`, `score` and `date`, with `score` a number in [-8, 8].
pub fn validate_import_payload(payload: &Value) -> bool {
    let Some(items) = payload.as_array() else {
        return false;
    };

    items.iter().all(|item| {
        let Some(obj) = item.as_object() else {
            return false;
        };
        if !obj.contains_key("id") || !obj.contains_key("description") || !obj.contains_key("date")
        {
            return false;
        }
        match obj.get("score").and_then(Value::as_f64) {
            Some(score) => (-8.0..=8.0).contains(&score),
            None => false,
        }
    })
}

/// Parse and gate an import file's text, returning the sorted replacement
/// collection. Any failure rejects the whole payload; the caller leaves the
/// stored collection untouched.
pub fn parse_import(text: &str) -> AppResult<Vec<Event>> {
    let payload: Value = serde_json::from_str(text)
        .map_err(|e| AppError::ImportRejected(format!("not valid JSON: {e}")))?;

    if !validate_import_payload(&payload) {
        return Err(AppError::ImportRejected(
            "payload must be an array of events with id, description, score in [-8, 8] and date"
                .to_string(),
        ));
    }

    let mut events: Vec<Event> = serde_json::from_value(payload)
        .map_err(|e| AppError::ImportRejected(format!("malformed event: {e}")))?;

    // Older exports may lack the cached display date; fill it in.
    for ev in &mut events {
        if ev.display_date.is_empty() {
            ev.refresh_display_date();
        }
    }

    Ok(sort_by_date(&events))
}
