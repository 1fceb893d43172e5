//! Helpers for interpreting backend response bodies.

use serde_json::Value;

/// Extracts a human-readable error message from an error response body.
///
/// Understands `{"error": ...}` and `{"message": ...}` objects whose value is
/// a string or an array of strings, as well as a bare array of strings.
/// Array entries are joined with `"; "`. Anything else yields `None`.
#[must_use]
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value {
        Value::Object(map) => ["error", "message"]
            .iter()
            .find_map(|key| map.get(*key).and_then(message_from_value)),
        other => message_from_value(&other),
    }
}

fn message_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}
