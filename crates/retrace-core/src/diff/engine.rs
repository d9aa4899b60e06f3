//! Semantic diff computation.
//!
//! The entry point is [`compute_semantic_diff`], which accepts a raw
//! structural diff plus the old and new snapshots it was computed from, and
//! produces the ordered, deduplicated list of [`SemanticChange`] records.

use crate::diff::format::{format_sub_path, format_value};
use crate::diff::markers::{find_container, find_marker};
use crate::diff::resolve::{resolve_entity_name, resolve_root_name};
use retrace_core_types::{ChangeAction, DiffPath, EntityKind, EntityRef, RawDiff, SemanticChange};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Sentinel entity path for changes attributed to the whole document.
const ROOT_PATH: &str = "root";

/// Transform a raw diff into entity-centered change records.
///
/// Pure function of its three inputs: no validation, no failure path.
/// Paths that do not resolve against the snapshots degrade to synthesized
/// ordinal names. The result order is the first-insertion order of distinct
/// entity keys while scanning `changed`, then `added`, then `removed`.
pub fn compute_semantic_diff(
    diff: &RawDiff,
    old_snapshot: &Value,
    new_snapshot: &Value,
) -> Vec<SemanticChange> {
    debug!(
        changed = diff.changed.len(),
        added = diff.added.len(),
        removed = diff.removed.len(),
        "computing semantic diff"
    );

    let mut acc = ChangeAccumulator::default();

    for change in &diff.changed {
        process_path(
            &mut acc,
            &change.path,
            ChangeAction::Modified,
            Some((&change.from, &change.to)),
            old_snapshot,
            new_snapshot,
        );
    }
    for path in &diff.added {
        process_path(
            &mut acc,
            path,
            ChangeAction::Added,
            None,
            old_snapshot,
            new_snapshot,
        );
    }
    for path in &diff.removed {
        process_path(
            &mut acc,
            path,
            ChangeAction::Removed,
            None,
            old_snapshot,
            new_snapshot,
        );
    }

    acc.into_changes()
}

/// Insertion-ordered accumulator: an explicit ordered list plus an
/// index-by-key map, so O(1) lookup and deterministic iteration order are
/// both structural facts rather than properties of a map implementation.
#[derive(Default)]
struct ChangeAccumulator {
    order: Vec<SemanticChange>,
    index: HashMap<String, usize>,
}

impl ChangeAccumulator {
    fn entry(&mut self, key: String, create: impl FnOnce() -> SemanticChange) -> &mut SemanticChange {
        let pos = match self.index.get(&key) {
            Some(&pos) => pos,
            None => {
                self.order.push(create());
                self.index.insert(key, self.order.len() - 1);
                self.order.len() - 1
            }
        };
        &mut self.order[pos]
    }

    fn into_changes(self) -> Vec<SemanticChange> {
        self.order
    }
}

fn process_path(
    acc: &mut ChangeAccumulator,
    raw_path: &str,
    action: ChangeAction,
    value_change: Option<(&Value, &Value)>,
    old_snapshot: &Value,
    new_snapshot: &Value,
) {
    let path = DiffPath::parse(raw_path);

    // 1-2. Containment scan: deepest recognized marker wins; no marker means
    //      the change belongs to the whole document.
    let (entity_path, entity_path_str, kind, sub_path) =
        match find_container(path.segments()) {
            Some((pos, kind)) => {
                let entity_path = path.prefix(pos + 1);
                let entity_path_str = entity_path.to_string();
                let sub_path = path.segments()[pos + 1..].to_vec();
                (entity_path, entity_path_str, kind, sub_path)
            }
            None => (
                DiffPath::default(),
                ROOT_PATH.to_string(),
                EntityKind::Program,
                path.segments().to_vec(),
            ),
        };

    // 3. Removed entities are resolved against the old snapshot; everything
    //    else against the new one.
    let snapshot = match action {
        ChangeAction::Removed => old_snapshot,
        _ => new_snapshot,
    };

    let name = if entity_path_str == ROOT_PATH {
        resolve_root_name(snapshot)
    } else {
        resolve_entity_name(snapshot, &entity_path, kind)
    };

    // 4. Parent context: exercises carry their day's name, days their
    //    week's. Empty when the enclosing container is absent.
    let parent_name = match kind {
        EntityKind::Exercise => enclosing_name(snapshot, &path, "days", EntityKind::Day),
        EntityKind::Day => enclosing_name(snapshot, &path, "weeks", EntityKind::Week),
        _ => String::new(),
    };

    // 5. One entry per entity key, initialized as a plain modification.
    let key = format!("{}:{}", kind, entity_path_str);
    let entry = acc.entry(key.clone(), || SemanticChange {
        id: key,
        entity: EntityRef {
            kind,
            name: name.clone(),
            path: entity_path_str.clone(),
            parent_name,
        },
        action: ChangeAction::Modified,
        description: format!("Updated {}", name),
        details: Vec::new(),
    });

    if sub_path.is_empty() {
        // 6. The raw change targets the entity itself: its action overrides
        //    the modified default. Overrides are idempotent and preserve any
        //    details accumulated from earlier sub-field changes.
        entry.action = action;
        match action {
            ChangeAction::Added => entry.description = format!("Added {}", name),
            ChangeAction::Removed => entry.description = format!("Removed {}", name),
            ChangeAction::Modified => {}
        }
    } else {
        // 7. Sub-field change: append a readable detail line.
        let label = format_sub_path(&sub_path);
        let detail = match value_change {
            Some((from, to)) => {
                format!("{}: {} → {}", label, format_value(from), format_value(to))
            }
            None => label,
        };
        entry.details.push(detail);
    }
}

/// Name of the enclosing container entity found by marker scan over the
/// full raw path, resolved in the same snapshot as the entity itself.
fn enclosing_name(snapshot: &Value, path: &DiffPath, marker: &str, kind: EntityKind) -> String {
    match find_marker(path.segments(), marker) {
        Some(pos) => resolve_entity_name(snapshot, &path.prefix(pos + 1), kind),
        None => String::new(),
    }
}
