use regex::Regex;
use serde_json::{Map, Value};

const REDACTED: &str = "[REDACTED]";

/// Redacts and truncates every string in `value`, then wraps non-objects as
/// `{"value": ...}` since LangSmith expects object inputs/outputs.
pub fn prepare_payload(value: Value, redact: Option<&Regex>, max_bytes: usize) -> Value {
    match scrub(value, redact, max_bytes) {
        object @ Value::Object(_) => object,
        other => Value::Object(Map::from_iter([("value".to_string(), other)])),
    }
}

fn scrub(value: Value, redact: Option<&Regex>, max_bytes: usize) -> Value {
    match value {
        Value::String(text) => {
            let text = match redact {
                Some(pattern) => pattern.replace_all(&text, REDACTED).into_owned(),
                None => text,
            };
            Value::String(truncate(text, max_bytes))
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| scrub(item, redact, max_bytes))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, item)| (key, scrub(item, redact, max_bytes)))
                .collect(),
        ),
        other => other,
    }
}

fn truncate(mut text: String, max_bytes: usize) -> String {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text
}
