//! Core domain logic for Punchlist: binding work items to 3D viewer
//! viewpoints and selection snapshots, and re-deriving highlight groups
//! from the recorded task set.
//! This crate is the single source of truth for business invariants.

pub mod highlight;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod viewer;

pub use highlight::group::{Dimension, GroupKey, RECALL_GROUP_KEY};
pub use highlight::manager::{GroupError, HighlightGroupManager};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::roster::{Assignee, AssigneeId, Roster, RosterError};
pub use model::selection::{ElementId, ModelId, SelectionMap};
pub use model::task::{Priority, Task, TaskDraft, TaskId, Vec3, Viewpoint};
pub use service::board::{RecallError, TaskBoard};
pub use service::recall::{RecallState, TaskRecall};
pub use service::task_service::{CreateTaskError, TaskService, TaskSummary, ValidationIssue};
pub use store::task_store::{InMemoryTaskStore, TaskStore};
pub use viewer::{
    CameraPort, HighlightPort, HighlightResolver, HighlightStyle, SelectionPort, Viewer,
    ViewerError,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
