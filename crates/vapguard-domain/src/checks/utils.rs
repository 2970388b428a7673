use serde_json::{Map, Value as JsonValue};

/// Render a scalar for reason strings: strings bare, everything else as JSON.
pub fn display_scalar(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render an allow-list the way the apiserver does: `"a", "b", "c"`.
pub fn quoted_list(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Subset-match: the pattern matches iff every field it specifies is present
/// on the candidate with an equal value. Fields the candidate has but the
/// pattern omits are ignored; a pattern field missing on the candidate
/// disqualifies this pattern for this candidate.
pub fn subset_matches(
    pattern: &Map<String, JsonValue>,
    candidate: &Map<String, JsonValue>,
) -> bool {
    pattern
        .iter()
        .all(|(field, expected)| candidate.get(field) == Some(expected))
}

/// String items of a parameter allow-list; non-string items are skipped so a
/// malformed entry narrows the list instead of crashing.
pub fn string_items(items: &[JsonValue]) -> Vec<&str> {
    items.iter().filter_map(JsonValue::as_str).collect()
}
