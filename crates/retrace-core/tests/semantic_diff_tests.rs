//! Pure semantic-diff unit tests.
//!
//! All tests operate exclusively on in-memory values (no I/O).

use retrace_core::compute_semantic_diff;
use retrace_core_types::{ChangeAction, EntityKind, RawDiff, ValueChange};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A small but representative program document.
fn base_program() -> Value {
    json!({
        "name": "12-Week Base",
        "weeks": [
            {
                "name": "Week One",
                "days": [
                    {
                        "name": "Push Day",
                        "exercises": [
                            {
                                "exercise": {"name": "Bench Press"},
                                "sets": [{"weight": 80, "reps": 10}]
                            },
                            {
                                "name": "Overhead Press",
                                "sets": [{"weight": 40, "reps": 12}]
                            }
                        ]
                    },
                    {"name": "Pull Day", "exercises": []}
                ]
            },
            {"name": "Week Two", "days": []}
        ]
    })
}

fn changed(path: &str, from: Value, to: Value) -> ValueChange {
    ValueChange {
        path: path.to_string(),
        from,
        to,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_empty_diff_yields_empty_sequence() {
    let doc = base_program();
    let changes = compute_semantic_diff(&RawDiff::default(), &doc, &doc);
    assert!(changes.is_empty());
}

#[test]
fn test_changes_under_same_entity_deduplicate() {
    let doc = base_program();
    let diff = RawDiff {
        changed: vec![
            changed(
                "weeks[0].days[0].exercises[0].sets[0].weight",
                json!(80),
                json!(85),
            ),
            changed(
                "weeks[0].days[0].exercises[0].sets[0].reps",
                json!(10),
                json!(12),
            ),
        ],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &doc, &doc);

    assert_eq!(changes.len(), 1);
    let entry = &changes[0];
    assert_eq!(entry.entity.kind, EntityKind::Exercise);
    assert_eq!(entry.entity.name, "Bench Press");
    assert_eq!(entry.action, ChangeAction::Modified);
    // Details follow raw-change discovery order
    assert_eq!(
        entry.details,
        vec!["Set 1 › weight: 80 → 85", "Set 1 › reps: 10 → 12"]
    );
}

#[test]
fn test_entity_key_is_kind_and_path() {
    let doc = base_program();
    let diff = RawDiff {
        changed: vec![changed(
            "weeks[0].days[0].exercises[0].sets[0].weight",
            json!(80),
            json!(85),
        )],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &doc, &doc);

    assert_eq!(changes[0].id, "exercise:weeks[0].days[0].exercises[0]");
    assert_eq!(changes[0].entity.path, "weeks[0].days[0].exercises[0]");
}

#[test]
fn test_self_path_add_sets_action_and_description() {
    let old = base_program();
    let mut new = base_program();
    new["weeks"][1]["days"] = json!([
        {"name": "Leg Day", "exercises": []}
    ]);

    let diff = RawDiff {
        added: vec!["weeks[1].days[0]".to_string()],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &old, &new);

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].action, ChangeAction::Added);
    assert_eq!(changes[0].description, "Added Leg Day");
    assert!(changes[0].details.is_empty());
}

#[test]
fn test_self_override_preserves_accumulated_details() {
    // A sub-field change lands first, then the entity itself is removed:
    // the action and description flip, the detail line stays.
    let old = base_program();
    let new = base_program();
    let diff = RawDiff {
        changed: vec![changed(
            "weeks[0].days[0].exercises[0].sets[0].weight",
            json!(80),
            json!(85),
        )],
        removed: vec!["weeks[0].days[0].exercises[0]".to_string()],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &old, &new);

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].action, ChangeAction::Removed);
    assert_eq!(changes[0].description, "Removed Bench Press");
    assert_eq!(changes[0].details, vec!["Set 1 › weight: 80 → 85"]);
}

#[test]
fn test_output_order_follows_collection_scan() {
    // changed → added → removed across three distinct entities
    let doc = base_program();
    let diff = RawDiff {
        changed: vec![changed("weeks[0].days[0].name", json!("Push Day"), json!("Heavy Push"))],
        added: vec!["weeks[1]".to_string()],
        removed: vec!["weeks[0].days[1]".to_string()],
    };

    let changes = compute_semantic_diff(&diff, &doc, &doc);

    assert_eq!(changes.len(), 3);
    assert_eq!(changes[0].entity.kind, EntityKind::Day);
    assert_eq!(changes[0].entity.path, "weeks[0].days[0]");
    assert_eq!(changes[1].entity.kind, EntityKind::Week);
    assert_eq!(changes[1].entity.path, "weeks[1]");
    assert_eq!(changes[2].entity.kind, EntityKind::Day);
    assert_eq!(changes[2].entity.path, "weeks[0].days[1]");
}

#[test]
fn test_unresolvable_week_synthesizes_ordinal_name() {
    let doc = json!({"weeks": []});
    let diff = RawDiff {
        added: vec!["weeks[2]".to_string()],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &doc, &doc);

    assert_eq!(changes[0].entity.name, "Week 3");
    assert_eq!(changes[0].description, "Added Week 3");
}

#[test]
fn test_exercise_parent_is_enclosing_day() {
    let doc = base_program();
    let diff = RawDiff {
        changed: vec![changed(
            "weeks[0].days[1].exercises[0].name",
            json!("a"),
            json!("b"),
        )],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &doc, &doc);

    assert_eq!(changes[0].entity.kind, EntityKind::Exercise);
    assert_eq!(changes[0].entity.parent_name, "Pull Day");
}

#[test]
fn test_day_parent_is_enclosing_week() {
    let doc = base_program();
    let diff = RawDiff {
        changed: vec![changed("weeks[0].days[0].name", json!("a"), json!("b"))],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &doc, &doc);

    assert_eq!(changes[0].entity.parent_name, "Week One");
}

#[test]
fn test_exercise_without_day_segment_has_no_parent() {
    let doc = json!({"exercises": [{"name": "Squat"}]});
    let diff = RawDiff {
        changed: vec![changed("exercises[0].name", json!("a"), json!("Squat"))],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &doc, &doc);

    assert_eq!(changes[0].entity.parent_name, "");
}

#[test]
fn test_removed_entity_resolves_against_old_snapshot() {
    let old = base_program();
    // The exercise is gone from the new snapshot entirely
    let mut new = base_program();
    new["weeks"][0]["days"][0]["exercises"] = json!([]);

    let diff = RawDiff {
        removed: vec!["weeks[0].days[0].exercises[0]".to_string()],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &old, &new);

    assert_eq!(changes[0].action, ChangeAction::Removed);
    assert_eq!(changes[0].entity.name, "Bench Press");
}

#[test]
fn test_added_entity_resolves_against_new_snapshot() {
    let old = base_program();
    let mut new = base_program();
    new["weeks"]
        .as_array_mut()
        .unwrap()
        .push(json!({"name": "Deload Week", "days": []}));

    let diff = RawDiff {
        added: vec!["weeks[2]".to_string()],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &old, &new);

    assert_eq!(changes[0].entity.name, "Deload Week");
}

#[test]
fn test_null_value_renders_as_empty() {
    let doc = base_program();
    let diff = RawDiff {
        changed: vec![changed(
            "weeks[0].days[0].exercises[0].sets[0].weight",
            Value::Null,
            json!(5),
        )],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &doc, &doc);

    assert_eq!(changes[0].details[0], "Set 1 › weight: empty → 5");
}

#[test]
fn test_composite_values_render_as_ellipsis() {
    let doc = base_program();
    let diff = RawDiff {
        changed: vec![changed(
            "weeks[0].days[0].exercises[0].sets[0]",
            json!({"weight": 80}),
            json!({"weight": 85}),
        )],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &doc, &doc);

    assert_eq!(changes[0].details[0], "Set 1: ... → ...");
}

#[test]
fn test_added_sub_path_detail_has_no_value_pair() {
    let doc = base_program();
    let diff = RawDiff {
        added: vec!["weeks[0].days[0].exercises[0].sets[1]".to_string()],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &doc, &doc);

    assert_eq!(changes[0].action, ChangeAction::Modified);
    assert_eq!(changes[0].details, vec!["Set 2"]);
}

#[test]
fn test_path_without_marker_attributes_to_program_root() {
    let old = json!({"name": "Old Name"});
    let new = json!({"name": "New Name"});
    let diff = RawDiff {
        changed: vec![changed("name", json!("Old Name"), json!("New Name"))],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &old, &new);

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].id, "program:root");
    assert_eq!(changes[0].entity.kind, EntityKind::Program);
    assert_eq!(changes[0].entity.path, "root");
    // Root resolves against the new snapshot for modifications
    assert_eq!(changes[0].entity.name, "New Name");
    assert_eq!(changes[0].details, vec!["Name: Old Name → New Name"]);
}

#[test]
fn test_unnamed_root_falls_back_to_program() {
    let doc = json!({"description": "no name field"});
    let diff = RawDiff {
        changed: vec![changed("description", json!("a"), json!("b"))],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &doc, &doc);

    assert_eq!(changes[0].entity.name, "Program");
}

#[test]
fn test_camel_case_fields_are_split_in_details() {
    let doc = base_program();
    let diff = RawDiff {
        changed: vec![changed(
            "weeks[0].days[0].exercises[0].restSeconds",
            json!(60),
            json!(90),
        )],
        ..Default::default()
    };

    let changes = compute_semantic_diff(&diff, &doc, &doc);

    assert_eq!(changes[0].details[0], "Rest Seconds: 60 → 90");
}

#[test]
fn test_malformed_paths_degrade_instead_of_failing() {
    let doc = base_program();
    let diff = RawDiff {
        changed: vec![changed("weeks[banana].days[].x", json!(1), json!(2))],
        added: vec!["".to_string()],
        ..Default::default()
    };

    // Must not panic; malformed segments resolve nowhere and degrade to
    // synthesized names.
    let changes = compute_semantic_diff(&diff, &doc, &doc);
    assert!(!changes.is_empty());
}

#[test]
fn test_identical_inputs_produce_identical_output() {
    let old = base_program();
    let mut new = base_program();
    new["weeks"][0]["days"][0]["exercises"][0]["sets"][0]["weight"] = json!(85);

    let diff = RawDiff {
        changed: vec![changed(
            "weeks[0].days[0].exercises[0].sets[0].weight",
            json!(80),
            json!(85),
        )],
        added: vec!["weeks[1].days[0]".to_string()],
        removed: vec!["weeks[0].days[1]".to_string()],
    };

    let first = compute_semantic_diff(&diff, &old, &new);
    let second = compute_semantic_diff(&diff, &old, &new);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
