//! Retrace Core - Semantic diff engine for hierarchical program documents
//!
//! This crate turns a raw structural diff (sets of added/removed/changed
//! field paths between two versions of a nested document) into a
//! deduplicated list of entity-centered change summaries, including:
//!
//! - Container detection via an explicit, ordered marker table
//! - Entity name and parent-context resolution against the
//!   action-appropriate snapshot
//! - Readable field labels and value formatting for change details
//! - A Markdown change-report renderer grouped by action
//!
//! The engine is a pure function of its inputs: it never fails and never
//! validates the raw diff against the snapshots; unresolvable paths degrade
//! to synthesized ordinal names.

pub mod diff;
pub mod errors;
pub mod logging;

pub use diff::engine::compute_semantic_diff;
pub use diff::report::render_change_report;
pub use errors::{Result, RetraceError};
