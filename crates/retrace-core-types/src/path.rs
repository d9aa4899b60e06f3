//! Structured diff paths.
//!
//! Raw diffs address into nested documents with dot/bracket strings such as
//! `weeks[0].days[1].exercises[2].sets[0].weight`. This module parses those
//! strings once into a typed segment sequence so that container detection
//! and sub-path formatting operate on structure, not on substring matching.
//!
//! Parsing is total: malformed bracket text degrades to a plain field
//! segment and never fails. `Display` round-trips well-formed paths back to
//! their canonical string form.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One step into a nested document: a field name, optionally followed by a
/// numeric array index (`weeks[0]` → field `weeks`, index `0`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    /// Field name addressed by this segment
    pub field: String,
    /// Array index, when the segment addresses an array element
    pub index: Option<usize>,
}

impl PathSegment {
    /// Plain field segment without an index.
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            field: name.into(),
            index: None,
        }
    }

    /// Field segment addressing an array element.
    pub fn indexed(name: impl Into<String>, index: usize) -> Self {
        Self {
            field: name.into(),
            index: Some(index),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}[{}]", self.field, i),
            None => write!(f, "{}", self.field),
        }
    }
}

/// A parsed diff path: an ordered sequence of [`PathSegment`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffPath {
    segments: Vec<PathSegment>,
}

impl DiffPath {
    /// Parse a dot/bracket address string into a structured path.
    ///
    /// Segments whose bracket text is not a valid unsigned integer are kept
    /// verbatim as plain field segments (`weeks[x]` stays one field named
    /// `weeks[x]`). Empty segments produced by stray dots are dropped.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        let segments = raw
            .split('.')
            .filter(|part| !part.is_empty())
            .map(parse_segment)
            .collect();
        Self { segments }
    }

    /// Build a path from already-structured segments.
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// The path consisting of the first `n` segments.
    pub fn prefix(&self, n: usize) -> Self {
        Self {
            segments: self.segments[..n.min(self.segments.len())].to_vec(),
        }
    }

    /// Array index of the final segment, if it has one.
    pub fn last_index(&self) -> Option<usize> {
        self.segments.last().and_then(|s| s.index)
    }

    /// Look up the value this path addresses inside `root`.
    ///
    /// Returns `None` as soon as any segment fails to resolve (missing
    /// field, index out of bounds, or a scalar where a container was
    /// expected). The empty path resolves to `root` itself.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut current = root;
        for segment in &self.segments {
            current = current.get(segment.field.as_str())?;
            if let Some(i) = segment.index {
                current = current.get(i)?;
            }
        }
        Some(current)
    }
}

impl fmt::Display for DiffPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
            first = false;
        }
        Ok(())
    }
}

fn parse_segment(part: &str) -> PathSegment {
    if let Some(open) = part.find('[') {
        if let Some(inner) = part[open + 1..].strip_suffix(']') {
            if let Ok(index) = inner.parse::<usize>() {
                return PathSegment::indexed(&part[..open], index);
            }
        }
    }
    PathSegment::field(part)
}
