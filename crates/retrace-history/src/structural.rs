//! Structural raw-diff producer.
//!
//! Walks two document trees and reports where they differ as three path
//! collections: `added` (present only in the new tree), `removed` (present
//! only in the old tree), and `changed` (present in both with different
//! values). One-sided subtrees are reported once, at the granularity where
//! they diverge; composite values present on both sides always recurse, so
//! `changed` entries are leaf-granular.

use retrace_core_types::{PathSegment, RawDiff, ValueChange};
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::debug;

/// Compute the structural diff between two document snapshots.
///
/// Pure and infallible; identical documents produce a diff with
/// `has_changes() == false`. Paths are emitted in deterministic order
/// (object keys sorted, array indices ascending).
pub fn compute_raw_diff(old: &Value, new: &Value) -> RawDiff {
    let mut diff = RawDiff::default();
    walk(&mut Vec::new(), old, new, &mut diff);
    debug!(
        added = diff.added.len(),
        removed = diff.removed.len(),
        changed = diff.changed.len(),
        "computed raw diff"
    );
    diff
}

fn walk(prefix: &mut Vec<PathSegment>, old: &Value, new: &Value, out: &mut RawDiff) {
    match (old, new) {
        (Value::Object(a), Value::Object(b)) => {
            let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();
            for key in keys {
                prefix.push(PathSegment::field(key.clone()));
                match (a.get(key.as_str()), b.get(key.as_str())) {
                    (Some(old_val), Some(new_val)) => walk(prefix, old_val, new_val, out),
                    (None, Some(_)) => out.added.push(render(prefix)),
                    (Some(_), None) => out.removed.push(render(prefix)),
                    (None, None) => unreachable!("key came from one of the maps"),
                }
                prefix.pop();
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            let shared = a.len().min(b.len());
            for i in 0..shared {
                index_last(prefix, i);
                walk(prefix, &a[i], &b[i], out);
                unindex_last(prefix);
            }
            for i in shared..b.len() {
                index_last(prefix, i);
                out.added.push(render(prefix));
                unindex_last(prefix);
            }
            for i in shared..a.len() {
                index_last(prefix, i);
                out.removed.push(render(prefix));
                unindex_last(prefix);
            }
        }
        _ => {
            if old != new {
                out.changed.push(ValueChange {
                    path: render(prefix),
                    from: old.clone(),
                    to: new.clone(),
                });
            }
        }
    }
}

/// Attach an array index to the innermost segment for the duration of a
/// recursion step. Root-level and nested arrays, which have no free field
/// segment to index, get a synthetic empty-field segment instead.
fn index_last(prefix: &mut Vec<PathSegment>, i: usize) {
    match prefix.last_mut() {
        Some(segment) if segment.index.is_none() => segment.index = Some(i),
        _ => prefix.push(PathSegment::indexed("", i)),
    }
}

fn unindex_last(prefix: &mut Vec<PathSegment>) {
    match prefix.last_mut() {
        Some(segment) if segment.field.is_empty() => {
            prefix.pop();
        }
        Some(segment) => segment.index = None,
        None => {}
    }
}

fn render(prefix: &[PathSegment]) -> String {
    prefix
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}
