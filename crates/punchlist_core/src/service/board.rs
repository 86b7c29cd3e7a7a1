//! Board facade exposed to the surrounding UI layer.
//!
//! # Responsibility
//! - Wire task creation, recall and colorization toggles over one shared
//!   store/roster/viewer set.
//! - Keep the task store as the single source of truth consulted on every
//!   dimension activation.

use crate::highlight::group::Dimension;
use crate::highlight::manager::{GroupError, HighlightGroupManager};
use crate::model::roster::Roster;
use crate::model::task::{Task, TaskDraft, TaskId};
use crate::service::recall::{RecallState, TaskRecall};
use crate::service::task_service::{CreateTaskError, TaskService, TaskSummary};
use crate::store::task_store::{InMemoryTaskStore, TaskStore};
use crate::viewer::Viewer;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Recall entry-point errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecallError {
    /// No stored task carries the given id.
    TaskNotFound(TaskId),
    /// Highlight-group failure while re-highlighting the snapshot.
    Group(GroupError),
}

impl Display for RecallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Group(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RecallError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Group(err) => Some(err),
            Self::TaskNotFound(_) => None,
        }
    }
}

impl From<GroupError> for RecallError {
    fn from(value: GroupError) -> Self {
        Self::Group(value)
    }
}

/// Single-session task board: the UI-facing entry points from one place.
///
/// UI events arrive on a single logical thread, so no locking is needed;
/// a multi-client port of this facade must add a transactional boundary
/// around append vs. group recomputation.
pub struct TaskBoard<S: TaskStore> {
    tasks: TaskService<S>,
    groups: HighlightGroupManager,
    recall: TaskRecall,
}

impl TaskBoard<InMemoryTaskStore> {
    /// Builds a board over a fresh in-memory store.
    pub fn new(roster: Roster, viewer: Arc<Viewer>) -> Self {
        Self::with_store(InMemoryTaskStore::new(), roster, viewer)
    }
}

impl<S: TaskStore> TaskBoard<S> {
    pub fn with_store(store: S, roster: Roster, viewer: Arc<Viewer>) -> Self {
        let groups = HighlightGroupManager::new(viewer.clone(), roster.clone());
        let recall = TaskRecall::new(viewer.clone());
        let tasks = TaskService::new(store, roster, viewer);
        Self {
            tasks,
            groups,
            recall,
        }
    }

    /// Creation entry point: returns the created task or a validation
    /// failure list the UI can redisplay inline.
    pub fn create_task(&mut self, draft: &TaskDraft) -> Result<Task, CreateTaskError> {
        self.tasks.create(draft)
    }

    /// Full task sequence in creation order.
    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    /// Summary projections for the recall list.
    pub fn summaries(&self) -> Vec<TaskSummary> {
        self.tasks.summaries()
    }

    /// Recall entry point: restores the task's viewpoint and re-highlights
    /// its selection via the transient group.
    pub fn recall_task(&mut self, id: TaskId) -> Result<(), RecallError> {
        let task = self
            .tasks
            .get(id)
            .cloned()
            .ok_or(RecallError::TaskNotFound(id))?;
        self.recall.select(&task, &mut self.groups)?;
        Ok(())
    }

    /// Current recall state.
    pub fn recall_state(&self) -> RecallState {
        self.recall.state()
    }

    /// Assignee-dimension colorization toggle.
    pub fn set_colorize_by_assignee(&mut self, active: bool) -> Result<(), GroupError> {
        self.set_colorize(Dimension::Assignee, active)
    }

    /// Priority-dimension colorization toggle.
    pub fn set_colorize_by_priority(&mut self, active: bool) -> Result<(), GroupError> {
        self.set_colorize(Dimension::Priority, active)
    }

    /// Whether one dimension is currently active.
    pub fn colorize_active(&self, dimension: Dimension) -> bool {
        self.groups.is_active(dimension)
    }

    fn set_colorize(&mut self, dimension: Dimension, active: bool) -> Result<(), GroupError> {
        // Membership derives from the live store at toggle time, never from
        // a cached copy.
        let tasks: Vec<Task> = self.tasks.tasks().to_vec();
        self.groups.set_active(dimension, active, &tasks)
    }
}
