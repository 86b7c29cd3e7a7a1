//! Task recall state machine.
//!
//! # Responsibility
//! - Restore a stored task's viewpoint through the camera port.
//! - Re-highlight the task's selection snapshot via the transient group.
//!
//! # Invariants
//! - Selecting a task always replaces any prior transient membership; no
//!   explicit deselect exists.
//! - Recalling a task with an empty selection restores the viewpoint and
//!   leaves the transient group untouched.

use crate::highlight::manager::{GroupError, HighlightGroupManager};
use crate::model::task::{Task, TaskId};
use crate::viewer::Viewer;
use std::sync::Arc;

/// Recall lifecycle: nothing shown, or one task's snapshot on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecallState {
    Idle,
    Showing(TaskId),
}

/// Drives viewpoint restoration and transient highlighting for one task.
pub struct TaskRecall {
    viewer: Arc<Viewer>,
    state: RecallState,
}

impl TaskRecall {
    pub fn new(viewer: Arc<Viewer>) -> Self {
        Self {
            viewer,
            state: RecallState::Idle,
        }
    }

    pub fn state(&self) -> RecallState {
        self.state
    }

    /// Shows one task: animated camera transition to the stored viewpoint,
    /// then transient re-highlight of its selection snapshot if non-empty.
    ///
    /// Valid from `Idle` and from `Showing` (re-selection replaces the
    /// transient membership implicitly).
    pub fn select(
        &mut self,
        task: &Task,
        groups: &mut HighlightGroupManager,
    ) -> Result<(), GroupError> {
        self.viewer.camera().set_look_at(&task.viewpoint, true);
        if !task.selection.is_empty() {
            groups.show_recall(&task.selection)?;
        }
        self.state = RecallState::Showing(task.id);
        log::info!(
            "event=task_recalled module=recall status=ok task_id={} elements={}",
            task.id,
            task.selection.element_count()
        );
        Ok(())
    }
}
