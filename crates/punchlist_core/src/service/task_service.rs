//! Task creation and listing use-cases.
//!
//! # Responsibility
//! - Validate drafts and resolve assignees against the injected roster.
//! - Snapshot camera and selection state at creation time.
//! - Append immutable records to the task store.
//!
//! # Invariants
//! - Viewpoint and selection are captured inside the creation call, before
//!   any deferred work, so the snapshot matches the viewer state the user
//!   confirmed against.
//! - Validation failures are recoverable and leave the store untouched.

use crate::model::roster::Roster;
use crate::model::task::{Priority, Task, TaskDraft, TaskId};
use crate::store::task_store::TaskStore;
use crate::viewer::{Viewer, ViewerError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// One recoverable problem with a submitted draft.
///
/// Reported as a list so the UI can redisplay the form with every field
/// message at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Description is empty after trim.
    EmptyDescription,
}

impl ValidationIssue {
    /// Stable user-facing message for inline form display.
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyDescription => "Fill in Description",
        }
    }
}

impl Display for ValidationIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Task creation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateTaskError {
    /// Recoverable form problems; the user may correct and resubmit.
    Validation(Vec<ValidationIssue>),
    /// The submitted assignee does not resolve against the roster. The form
    /// is populated from the same roster, so this is treated as an invariant
    /// violation and fails the creation attempt hard.
    UnknownAssignee(String),
    /// Viewer capability failure during snapshot capture.
    Viewer(ViewerError),
}

impl Display for CreateTaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(issues) => {
                write!(f, "draft validation failed:")?;
                for issue in issues {
                    write!(f, " {issue};")?;
                }
                Ok(())
            }
            Self::UnknownAssignee(name) => write!(f, "no such assignee: {name}"),
            Self::Viewer(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CreateTaskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewerError> for CreateTaskError {
    fn from(value: ViewerError) -> Self {
        Self::Viewer(value)
    }
}

/// List projection of one task for summary rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    pub id: TaskId,
    pub description: String,
    pub assignee_name: String,
    pub priority: Priority,
    pub created_at_ms: i64,
}

/// Task creation/read facade over a store and the injected roster.
pub struct TaskService<S: TaskStore> {
    store: S,
    roster: Roster,
    viewer: Arc<Viewer>,
}

impl<S: TaskStore> TaskService<S> {
    pub fn new(store: S, roster: Roster, viewer: Arc<Viewer>) -> Self {
        Self {
            store,
            roster,
            viewer,
        }
    }

    /// Creates one task from a submitted draft.
    ///
    /// Resolves the assignee, validates the description, captures the
    /// current viewpoint and selection, then appends the frozen record.
    /// Capture happens synchronously inside this call; nothing may defer
    /// between the user's confirmation and the snapshot reads.
    pub fn create(&mut self, draft: &TaskDraft) -> Result<Task, CreateTaskError> {
        let mut issues = Vec::new();
        if draft.description.trim().is_empty() {
            issues.push(ValidationIssue::EmptyDescription);
        }
        if !issues.is_empty() {
            log::debug!(
                "event=task_create module=store status=invalid issues={}",
                issues.len()
            );
            return Err(CreateTaskError::Validation(issues));
        }

        let assignee = self
            .roster
            .resolve_name(&draft.assignee_name)
            .ok_or_else(|| {
                log::error!(
                    "event=task_create module=store status=error reason=unknown_assignee name={}",
                    draft.assignee_name
                );
                CreateTaskError::UnknownAssignee(draft.assignee_name.clone())
            })?;

        let viewpoint = self.viewer.capture_viewpoint()?;
        let selection = self.viewer.capture_selection();

        let task = Task::new(
            assignee.id,
            draft.description.trim(),
            draft.priority,
            viewpoint,
            selection,
        );
        let stored = self.store.append(task);
        log::info!(
            "event=task_created module=store status=ok task_id={} assignee_id={} priority={} elements={}",
            stored.id,
            stored.assignee_id,
            stored.priority.as_str(),
            stored.selection.element_count()
        );
        Ok(stored.clone())
    }

    /// All tasks in creation order.
    pub fn tasks(&self) -> &[Task] {
        self.store.list()
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    /// Summary projections for recall-list rendering, in creation order.
    ///
    /// Tasks always reference resolved roster entries, so a missing name
    /// here would be an invariant violation; it is rendered as a marker
    /// string rather than dropped silently.
    pub fn summaries(&self) -> Vec<TaskSummary> {
        self.store
            .list()
            .iter()
            .map(|task| TaskSummary {
                id: task.id,
                description: task.description.clone(),
                assignee_name: self
                    .roster
                    .get(task.assignee_id)
                    .map(|assignee| assignee.display_name.clone())
                    .unwrap_or_else(|| format!("<unknown assignee {}>", task.assignee_id)),
                priority: task.priority,
                created_at_ms: task.created_at_ms,
            })
            .collect()
    }

    /// Roster injected at construction.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}
