//! Domain entity identification.
//!
//! Every raw change is attributed to the semantically meaningful object it
//! belongs to. The entity kinds form a closed set ordered by containment
//! depth, outermost first.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of domain entity kinds, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Program,
    Week,
    Day,
    Exercise,
    Set,
    SetGroup,
    Meal,
    Food,
    Other,
}

impl EntityKind {
    /// Human-readable label used in synthesized ordinal names ("Week 3").
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Program => "Program",
            EntityKind::Week => "Week",
            EntityKind::Day => "Day",
            EntityKind::Exercise => "Exercise",
            EntityKind::Set => "Set",
            EntityKind::SetGroup => "Set Group",
            EntityKind::Meal => "Meal",
            EntityKind::Food => "Food",
            EntityKind::Other => "Other",
        }
    }

    /// Wire form used in change ids (`exercise:weeks[0].days[0].exercises[2]`).
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Program => "program",
            EntityKind::Week => "week",
            EntityKind::Day => "day",
            EntityKind::Exercise => "exercise",
            EntityKind::Set => "set",
            EntityKind::SetGroup => "setGroup",
            EntityKind::Meal => "meal",
            EntityKind::Food => "food",
            EntityKind::Other => "other",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to the entity a change belongs to.
///
/// `path` is the address of the entity itself (the matched containment
/// segment), not the changed leaf field. `parent_name` is the label of the
/// immediately enclosing container entity, empty when there is none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRef {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub name: String,
    pub path: String,
    pub parent_name: String,
}
