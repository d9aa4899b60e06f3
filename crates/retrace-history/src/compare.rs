//! Version comparison.
//!
//! Comparing two versions always reads as progress from the older to the
//! newer one regardless of selection order, so "added" means "appeared in
//! the update" even when the user picked the newer version first.

use crate::history::VersionHistory;
use crate::structural::compute_raw_diff;
use retrace_core::{compute_semantic_diff, render_change_report, Result, RetraceError};
use retrace_core_types::{RawDiff, SemanticChange};
use serde::{Deserialize, Serialize};

/// The outcome of comparing two versions of a history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// History index of the older version (larger index, newest-first)
    pub older_index: usize,
    /// History index of the newer version
    pub newer_index: usize,
    /// Structural diff, old → new
    pub raw: RawDiff,
    /// Entity-centered change records derived from `raw`
    pub changes: Vec<SemanticChange>,
}

impl Comparison {
    /// Render the comparison as a human-readable change report.
    pub fn render_report(&self) -> String {
        render_change_report(&self.changes)
    }
}

impl VersionHistory {
    /// Compare the versions at two indices.
    ///
    /// Index order does not matter: the pair is normalized so that changes
    /// read older → newer (with newest-first storage the smaller index is
    /// the newer version). Comparing an index with itself yields an empty
    /// change list.
    ///
    /// # Errors
    ///
    /// Returns `RetraceError::VersionNotFound` when either index is out of
    /// range.
    pub fn compare(&self, first: usize, second: usize) -> Result<Comparison> {
        let newer_index = first.min(second);
        let older_index = first.max(second);

        let newer = self
            .get(newer_index)
            .ok_or(RetraceError::VersionNotFound {
                index: newer_index,
                len: self.len(),
            })?;
        let older = self
            .get(older_index)
            .ok_or(RetraceError::VersionNotFound {
                index: older_index,
                len: self.len(),
            })?;

        let raw = compute_raw_diff(&older.state, &newer.state);
        let changes = compute_semantic_diff(&raw, &older.state, &newer.state);

        Ok(Comparison {
            older_index,
            newer_index,
            raw,
            changes,
        })
    }
}
