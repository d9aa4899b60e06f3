//! Entity name resolution.
//!
//! Display names are looked up in the snapshot appropriate to the action
//! (removed entities no longer exist in the new snapshot). Lookups that
//! fail, and entities without a usable name field, fall back to a
//! synthesized ordinal name ("Exercise 3") derived from the entity's last
//! array index.

use retrace_core_types::{DiffPath, EntityKind};
use serde_json::Value;

/// Resolve the display name for the entity at `path` in `snapshot`.
///
/// Name fields are domain specific: exercises may wrap their definition
/// (`exercise.name`) or carry `name` directly; days accept `name` or
/// `dayName`; weeks use `name`. Sets and set groups are always ordinal.
/// Everything else tries `name`, then `title`, then the ordinal fallback.
pub fn resolve_entity_name(snapshot: &Value, path: &DiffPath, kind: EntityKind) -> String {
    if matches!(kind, EntityKind::Set | EntityKind::SetGroup) {
        return ordinal_name(kind, path);
    }

    let Some(entity) = path.resolve(snapshot) else {
        return ordinal_name(kind, path);
    };

    match kind {
        EntityKind::Exercise => {
            if let Some(name) = entity
                .get("exercise")
                .and_then(|e| e.get("name"))
                .and_then(Value::as_str)
            {
                return name.to_string();
            }
        }
        EntityKind::Day => {
            if let Some(name) = entity.get("name").and_then(Value::as_str) {
                return name.to_string();
            }
            if let Some(name) = entity.get("dayName").and_then(Value::as_str) {
                return name.to_string();
            }
        }
        _ => {}
    }

    entity
        .get("name")
        .and_then(Value::as_str)
        .or_else(|| entity.get("title").and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| ordinal_name(kind, path))
}

/// Resolve the display name for the whole document.
pub fn resolve_root_name(snapshot: &Value) -> String {
    snapshot
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("Program")
        .to_string()
}

/// Synthesize `"<Kind> <N>"` from the 1-based index of the entity's last
/// path segment (1 when the segment carries no index).
fn ordinal_name(kind: EntityKind, path: &DiffPath) -> String {
    let index = path.last_index().map_or(1, |i| i + 1);
    format!("{} {}", kind.label(), index)
}
