//! Retrace History - Version snapshots, structural diffing, comparison
//!
//! This crate provides the stateful layer above the semantic diff engine:
//!
//! - `VersionSnapshot`: an immutable captured document state with identity,
//!   timestamp, and content digest
//! - `VersionHistory`: a capacity-bounded, newest-first snapshot list with
//!   digest-deduplicated recording, restore by index, and inline diff counts
//! - `compute_raw_diff`: the structural raw-diff producer consumed by the
//!   semantic engine
//! - `Comparison`: an order-normalized comparison of two versions, always
//!   reading older → newer
//!
//! Everything here is an in-memory value; there is no persistence.

pub mod compare;
pub mod history;
pub mod snapshot;
pub mod structural;

pub use compare::Comparison;
pub use history::{DiffCounts, RecordOutcome, VersionHistory};
pub use snapshot::{compute_state_digest, VersionSnapshot};
pub use structural::compute_raw_diff;
