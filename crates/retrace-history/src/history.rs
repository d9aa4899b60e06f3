//! Capacity-bounded version history.
//!
//! Versions are held newest-first, matching the order a history display
//! lists them in (index 0 is the current version). Recording is
//! digest-deduplicated: saving a state identical to the head is a no-op.

use crate::snapshot::VersionSnapshot;
use crate::structural::compute_raw_diff;
use retrace_core::{Result, RetraceError};
use serde_json::Value;
use tracing::debug;

/// Default number of versions retained.
pub const DEFAULT_CAPACITY: usize = 50;

/// Outcome of a [`VersionHistory::record`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A new snapshot was recorded
    Recorded,
    /// The state was identical to the current head; nothing recorded
    SkippedUnchanged,
}

/// Added/removed/changed path counts between a version and its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffCounts {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl DiffCounts {
    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.removed > 0 || self.changed > 0
    }
}

/// An in-memory, newest-first list of version snapshots.
#[derive(Debug, Clone, Default)]
pub struct VersionHistory {
    entries: Vec<VersionSnapshot>,
    capacity: usize,
}

impl VersionHistory {
    /// Create an empty history retaining at most `capacity` versions.
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Create an empty history with [`DEFAULT_CAPACITY`].
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The snapshot at `index` (0 = newest), if it exists.
    pub fn get(&self, index: usize) -> Option<&VersionSnapshot> {
        self.entries.get(index)
    }

    /// Iterate snapshots newest-first.
    pub fn iter(&self) -> impl Iterator<Item = &VersionSnapshot> {
        self.entries.iter()
    }

    /// Record a new document state as the current head.
    ///
    /// Skips recording when the state's digest equals the head's, so rapid
    /// repeated saves of an unchanged document do not pollute the history.
    /// The oldest version is dropped once the capacity bound is reached.
    ///
    /// # Errors
    ///
    /// Returns `RetraceError::Serialization` if the state cannot be
    /// serialized for digest computation.
    pub fn record(&mut self, state: Value, description: Option<String>) -> Result<RecordOutcome> {
        let snapshot = VersionSnapshot::capture(state, description)?;

        if let Some(head) = self.entries.first() {
            if head.digest == snapshot.digest {
                debug!(digest = %snapshot.digest, "state unchanged, skipping record");
                return Ok(RecordOutcome::SkippedUnchanged);
            }
        }

        debug!(id = %snapshot.id, "recording version");
        self.entries.insert(0, snapshot);
        self.entries.truncate(self.capacity);
        Ok(RecordOutcome::Recorded)
    }

    /// A clone of the state stored at `index`, for restoring it as the
    /// working document.
    ///
    /// # Errors
    ///
    /// Returns `RetraceError::VersionNotFound` when `index` is out of range.
    pub fn restore(&self, index: usize) -> Result<Value> {
        self.entries
            .get(index)
            .map(|snapshot| snapshot.state.clone())
            .ok_or(RetraceError::VersionNotFound {
                index,
                len: self.entries.len(),
            })
    }

    /// Added/removed/changed counts between the version at `index` and its
    /// predecessor (the next-older version). `None` when `index` has no
    /// predecessor.
    pub fn inline_counts(&self, index: usize) -> Option<DiffCounts> {
        let newer = self.entries.get(index)?;
        let older = self.entries.get(index + 1)?;
        let raw = compute_raw_diff(&older.state, &newer.state);
        Some(DiffCounts {
            added: raw.added.len(),
            removed: raw.removed.len(),
            changed: raw.changed.len(),
        })
    }
}
