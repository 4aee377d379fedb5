//! Accessor path resolution over JSON records.

use serde_json::Value;

/// Resolve a dot-separated accessor path against a record.
///
/// Objects are traversed by key, arrays by numeric segment. Returns `None`
/// as soon as any intermediate step is missing; never panics.
#[must_use]
pub fn resolve_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut value = record;
    for segment in path.split('.') {
        value = match value {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(value)
}

/// Render a value for cell display.
///
/// Strings render verbatim (no quotes), null renders empty, sequences join
/// their elements with a comma-and-space separator.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}
