//! Field label and value formatting for change details.

use retrace_core_types::PathSegment;
use serde_json::Value;

/// Array fields rendered as 1-based ordinal labels instead of raw indices.
const ORDINAL_FIELDS: &[(&str, &str)] = &[
    ("setGroups", "Set Group"),
    ("sets", "Set"),
    ("exercises", "Ex"),
];

/// Format a sub-path (the segments below an entity) into a readable field
/// label: known array fields become ordinal labels ("Set 2"), other indexed
/// segments keep their bracket form, plain fields are camelCase-split,
/// segments join with a visual separator, and the first letter of the whole
/// label is capitalized.
pub fn format_sub_path(segments: &[PathSegment]) -> String {
    let label = segments
        .iter()
        .map(format_segment)
        .collect::<Vec<_>>()
        .join(" › ");
    capitalize_first(&label)
}

fn format_segment(segment: &PathSegment) -> String {
    if let Some(index) = segment.index {
        let known = ORDINAL_FIELDS
            .iter()
            .find(|(field, _)| *field == segment.field);
        return match known {
            Some((_, label)) => format!("{} {}", label, index + 1),
            None => format!("{}[{}]", segment.field, index),
        };
    }
    split_camel_case(&segment.field)
}

/// Format a changed value for display: null renders as the word "empty",
/// composites as an ellipsis, scalars in their natural string form.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "empty".to_string(),
        Value::Object(_) | Value::Array(_) => "...".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
    }
}

fn split_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    for ch in field.chars() {
        if ch.is_ascii_uppercase() && !out.is_empty() {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

fn capitalize_first(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
