//! Core types shared across Retrace facilities
//!
//! This crate provides the foundational domain types used by the diff
//! engine, the version-history layer, and the CLI:
//!
//! - **Paths**: `DiffPath` / `PathSegment`, a structured representation of
//!   dot/bracket address strings into nested documents
//! - **Entities**: `EntityKind` and `EntityRef`, the closed set of domain
//!   entities a change can be attributed to
//! - **Changes**: `RawDiff` (the structural input boundary), `ChangeAction`,
//!   and `SemanticChange` (one row of the change report)

pub mod change;
pub mod entity;
pub mod path;

pub use change::{ChangeAction, RawDiff, SemanticChange, ValueChange};
pub use entity::{EntityKind, EntityRef};
pub use path::{DiffPath, PathSegment};
