//! Raw diff input and semantic change output shapes.
//!
//! `RawDiff` is the structural input boundary: three path collections
//! describing differences between an old and a new document snapshot.
//! `SemanticChange` is one row of the derived change report.

use crate::entity::EntityRef;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// What happened to an entity between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Added,
    Removed,
    Modified,
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChangeAction::Added => "added",
            ChangeAction::Removed => "removed",
            ChangeAction::Modified => "modified",
        };
        f.write_str(label)
    }
}

/// A leaf value change: the path exists in both snapshots with different
/// values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueChange {
    pub path: String,
    pub from: Value,
    pub to: Value,
}

/// Raw structural diff between two document snapshots.
///
/// Paths are unique within each collection and order-irrelevant on input;
/// downstream processing scans `changed`, then `added`, then `removed`, in
/// the order given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDiff {
    /// Paths present in the new snapshot but not the old
    pub added: Vec<String>,
    /// Paths present in the old snapshot but not the new
    pub removed: Vec<String>,
    /// Paths present in both with different leaf values
    pub changed: Vec<ValueChange>,
}

impl RawDiff {
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty() || !self.changed.is_empty()
    }
}

/// One row of the semantic change report.
///
/// `id` is the stable entity key (`<kind>:<entity path>`); all raw changes
/// under the same entity collapse into a single `SemanticChange`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticChange {
    pub id: String,
    pub entity: EntityRef,
    pub action: ChangeAction,
    pub description: String,
    pub details: Vec<String>,
}
