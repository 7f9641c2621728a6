//! Task List Payload
//!
//! Lenient decoding of a client-supplied task list. Elements without a
//! `text` field are dropped silently, so the stored list may be shorter
//! than what was sent.

use serde_json::Value;

use crate::domain::{DomainError, DomainResult, Task};
use crate::sanitize::sanitize_text_field;

/// Decode a JSON task list. Fails only if the payload is not a JSON array.
pub fn parse_task_list(raw: &str) -> DomainResult<Vec<Task>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| DomainError::InvalidInput(format!("task list is not JSON: {}", e)))?;

    match value {
        Value::Array(items) => Ok(sanitize_task_list(&items)),
        other => Err(DomainError::InvalidInput(format!(
            "task list must be an array, got {}",
            type_name(&other)
        ))),
    }
}

/// Keep structured elements carrying a `text`, in their original order.
pub fn sanitize_task_list(items: &[Value]) -> Vec<Task> {
    items
        .iter()
        .filter_map(|item| {
            let fields = item.as_object()?;
            let text = fields.get("text").and_then(coerce_text)?;
            let completed = fields.get("completed").is_some_and(is_truthy);
            Some(Task {
                text: sanitize_text_field(&text),
                completed,
            })
        })
        .collect()
}

/// Scalar-to-text coercion. `null` counts as a missing field.
fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some(String::new()),
        Value::Array(_) | Value::Object(_) => Some(String::new()),
    }
}

/// Loose boolean: empty, zero and `"0"` values are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
