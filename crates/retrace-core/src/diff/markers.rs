//! Container marker table.
//!
//! A raw change path is attributed to the deepest recognized container
//! segment along it. Recognition is driven by this explicit, ordered table
//! rather than by ad hoc substring matching: the first marker (in table
//! order, innermost first) whose field name appears in the path wins.

use retrace_core_types::{EntityKind, PathSegment};

/// Ordered container markers, innermost first.
///
/// Table order is the precedence rule: `exercises` beats `days` beats
/// `weeks` when several appear in one path.
pub const CONTAINER_MARKERS: &[(&str, EntityKind)] = &[
    ("exercises", EntityKind::Exercise),
    ("days", EntityKind::Day),
    ("weeks", EntityKind::Week),
];

/// Find the containment segment for a path.
///
/// Returns the segment position of the matched marker and the entity kind
/// it maps to, or `None` when no marker appears (the change then belongs to
/// the whole document).
pub fn find_container(segments: &[PathSegment]) -> Option<(usize, EntityKind)> {
    for (marker, kind) in CONTAINER_MARKERS {
        if let Some(pos) = find_marker(segments, marker) {
            return Some((pos, *kind));
        }
    }
    None
}

/// Position of the first segment whose field equals `marker`.
pub fn find_marker(segments: &[PathSegment], marker: &str) -> Option<usize> {
    segments.iter().position(|s| s.field == marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrace_core_types::DiffPath;

    fn segments(raw: &str) -> Vec<PathSegment> {
        DiffPath::parse(raw).segments().to_vec()
    }

    #[test]
    fn test_exercise_marker_wins_over_day_and_week() {
        let segs = segments("weeks[0].days[1].exercises[2].sets[0].weight");
        assert_eq!(find_container(&segs), Some((2, EntityKind::Exercise)));
    }

    #[test]
    fn test_day_marker_wins_over_week() {
        let segs = segments("weeks[0].days[1].name");
        assert_eq!(find_container(&segs), Some((1, EntityKind::Day)));
    }

    #[test]
    fn test_week_marker_alone() {
        let segs = segments("weeks[3]");
        assert_eq!(find_container(&segs), Some((0, EntityKind::Week)));
    }

    #[test]
    fn test_no_marker_is_none() {
        let segs = segments("name");
        assert_eq!(find_container(&segs), None);
    }

    #[test]
    fn test_first_occurrence_is_matched() {
        // A pathological path with the marker twice attributes to the first
        let segs = segments("exercises[0].exercises[1].name");
        assert_eq!(find_container(&segs), Some((0, EntityKind::Exercise)));
    }

    #[test]
    fn test_exact_field_match_only() {
        // Lookalike field names are not containment markers
        let segs = segments("exercisesArchive[0].name");
        assert_eq!(find_container(&segs), None);
    }
}
