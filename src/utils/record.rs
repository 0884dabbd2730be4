//! Tolerant field access on raw provider records.
//!
//! Provider payloads have no stable schema, so every accessor returns `None`
//! instead of failing when a field is missing or has an unexpected type.

use serde_json::Value;

/// Read a display string. Blank strings count as missing, numbers and
/// booleans are rendered as text.
pub fn text(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read a text field or fall back to a provider default.
pub fn text_or(record: &Value, key: &str, default: &str) -> String {
    text(record, key).unwrap_or_else(|| default.to_string())
}

/// Read a skill list from either a JSON array or a comma-separated string.
///
/// Non-string array entries are skipped; an empty result counts as missing.
pub fn skills(record: &Value, key: &str) -> Option<Vec<String>> {
    let list: Vec<String> = match record.get(key)? {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => return None,
    };
    (!list.is_empty()).then_some(list)
}

/// Provider-local id of a record, or `idx{position}` when it has none.
///
/// The positional form is kept apart from plain numeric provider ids.
pub fn local_id(record: &Value, index: usize) -> String {
    text(record, "id").unwrap_or_else(|| format!("idx{index}"))
}

/// Owned copy of a default skill set.
pub fn owned(skills: &[&str]) -> Vec<String> {
    skills.iter().map(|s| s.to_string()).collect()
}
