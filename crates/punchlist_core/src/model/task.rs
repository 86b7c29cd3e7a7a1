//! Task domain model.
//!
//! # Responsibility
//! - Define the immutable task record binding a work item to its captured
//!   viewpoint and selection snapshot.
//! - Define the draft payload submitted by the UI form.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `viewpoint` and `selection` are captured once at creation and never
//!   recomputed or mutated afterwards.
//! - Every stored task references exactly one resolved roster entry.

use crate::model::roster::AssigneeId;
use crate::model::selection::SelectionMap;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for one task record.
pub type TaskId = Uuid;

/// Work item urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Stable string form used in group keys and wire payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// All priority values in ascending urgency order.
    pub fn all() -> [Priority; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    /// Parses the stable string form.
    pub fn parse(value: &str) -> Option<Priority> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// A point in viewer world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Captured camera position and look-target pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewpoint {
    pub position: Vec3,
    pub target: Vec3,
}

impl Viewpoint {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }
}

/// UI form payload for task creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Display name of the assignee as shown in the form dropdown.
    pub assignee_name: String,
    pub description: String,
    pub priority: Priority,
}

/// Immutable task record, owned exclusively by the task store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global id, assigned at creation.
    pub id: TaskId,
    /// Resolved roster entry reference.
    pub assignee_id: AssigneeId,
    /// Non-empty work item text.
    pub description: String,
    pub priority: Priority,
    /// Creation timestamp in unix epoch milliseconds.
    pub created_at_ms: i64,
    /// Camera pose captured at creation, never recomputed.
    pub viewpoint: Viewpoint,
    /// Highlighted-element snapshot captured at creation; may be empty.
    pub selection: SelectionMap,
}

impl Task {
    /// Builds a new record with a generated id and a creation timestamp.
    ///
    /// Callers must pass snapshots captured from the viewer state the user
    /// last observed; this constructor freezes them.
    pub fn new(
        assignee_id: AssigneeId,
        description: impl Into<String>,
        priority: Priority,
        viewpoint: Viewpoint,
        selection: SelectionMap,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            assignee_id,
            description: description.into(),
            priority,
            created_at_ms: now_epoch_ms(),
            viewpoint,
            selection,
        }
    }
}

/// Current wall-clock time in unix epoch milliseconds.
///
/// Clamps to zero for clocks set before the epoch instead of failing.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{now_epoch_ms, Priority, Task, Vec3, Viewpoint};
    use crate::model::selection::SelectionMap;

    #[test]
    fn new_task_sets_identity_and_timestamp() {
        let viewpoint = Viewpoint::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, 0.0));
        let task = Task::new(1, "Fix wall", Priority::High, viewpoint, SelectionMap::new());

        assert!(!task.id.is_nil());
        assert_eq!(task.assignee_id, 1);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.viewpoint, viewpoint);
        assert!(task.selection.is_empty());
        assert!(task.created_at_ms > 0);
    }

    #[test]
    fn task_ids_are_not_reused() {
        let viewpoint = Viewpoint::default();
        let first = Task::new(1, "a", Priority::Low, viewpoint, SelectionMap::new());
        let second = Task::new(1, "a", Priority::Low, viewpoint, SelectionMap::new());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn priority_string_forms_round_trip() {
        for priority in Priority::all() {
            assert_eq!(Priority::parse(priority.as_str()), Some(priority));
        }
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn task_serialization_uses_expected_wire_fields() {
        let mut selection = SelectionMap::new();
        selection.insert("model-x", 10);
        selection.insert("model-x", 11);
        let task = Task::new(
            2,
            "Check slab reinforcement",
            Priority::Medium,
            Viewpoint::new(Vec3::new(5.0, 1.5, -2.0), Vec3::new(0.0, 1.0, 0.0)),
            selection,
        );

        let json = serde_json::to_value(&task).expect("task serializes");
        assert_eq!(json["id"], task.id.to_string());
        assert_eq!(json["assignee_id"], 2);
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["viewpoint"]["position"]["x"], 5.0);
        assert_eq!(json["selection"]["model-x"][0], 10);

        let decoded: Task = serde_json::from_value(json).expect("task decodes");
        assert_eq!(decoded, task);
    }

    #[test]
    fn epoch_clock_is_monotonic_enough_for_ordering() {
        let before = now_epoch_ms();
        let after = now_epoch_ms();
        assert!(after >= before);
    }
}
