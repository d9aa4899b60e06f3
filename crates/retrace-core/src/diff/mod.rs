//! Semantic diff engine.
//!
//! Maps a raw structural diff plus the two snapshots it was computed from
//! into an ordered list of entity-centered change records, suitable for a
//! version-comparison display.
//!
//! ## Entry point
//!
//! ```ignore
//! use retrace_core::diff::engine::compute_semantic_diff;
//!
//! let changes = compute_semantic_diff(&raw_diff, &old_snapshot, &new_snapshot);
//! let report = retrace_core::diff::report::render_change_report(&changes);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical output; result
//!   order is first-insertion order of distinct entity keys.
//! - **Deduplication**: every raw change maps to exactly one entry per
//!   entity key; none is dropped or duplicated.
//! - **Graceful degradation**: unresolvable paths yield synthesized ordinal
//!   names instead of errors; the engine never fails.
//! - **Snapshot selection**: removed entities resolve against the old
//!   snapshot, added/modified entities against the new one.

pub mod engine;
pub mod format;
pub mod markers;
pub mod resolve;
pub mod report;

pub use engine::compute_semantic_diff;
pub use report::render_change_report;
