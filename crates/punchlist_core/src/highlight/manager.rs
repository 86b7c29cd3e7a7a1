//! Highlight group manager.
//!
//! # Responsibility
//! - Register named groups with the highlighting renderer.
//! - Toggle the assignee and priority colorization dimensions.
//! - Drive the transient recall group.
//!
//! # Invariants
//! - Activation recomputes membership from scratch over the task sequence
//!   passed at call time; tasks added while a dimension was inactive are
//!   picked up by the next activation.
//! - Same-value toggles are no-ops.
//! - Tasks with an empty selection snapshot never contribute membership.

use crate::highlight::group::{Dimension, GroupKey};
use crate::model::roster::{AssigneeId, Roster};
use crate::model::selection::SelectionMap;
use crate::model::task::{Priority, Task};
use crate::viewer::{Viewer, ViewerError};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Errors from group registration and recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// Viewer capability failure (highlighter acquisition).
    Viewer(ViewerError),
    /// A stored task references an assignee id missing from the roster.
    /// Creation resolves every assignee, so this is an invariant violation,
    /// not a user mistake.
    UnresolvedAssignee(AssigneeId),
}

impl Display for GroupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Viewer(err) => write!(f, "{err}"),
            Self::UnresolvedAssignee(id) => {
                write!(f, "stored task references unknown assignee id: {id}")
            }
        }
    }
}

impl Error for GroupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewer(err) => Some(err),
            Self::UnresolvedAssignee(_) => None,
        }
    }
}

impl From<ViewerError> for GroupError {
    fn from(value: ViewerError) -> Self {
        Self::Viewer(value)
    }
}

/// Owner of named highlight groups and their toggle state.
///
/// Groups live as long as the manager, not as long as any single task.
pub struct HighlightGroupManager {
    viewer: Arc<Viewer>,
    roster: Roster,
    registered: BTreeSet<String>,
    assignee_active: bool,
    priority_active: bool,
}

impl HighlightGroupManager {
    pub fn new(viewer: Arc<Viewer>, roster: Roster) -> Self {
        Self {
            viewer,
            roster,
            registered: BTreeSet::new(),
            assignee_active: false,
            priority_active: false,
        }
    }

    /// Whether the given dimension is currently colorizing the model.
    pub fn is_active(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Assignee => self.assignee_active,
            Dimension::Priority => self.priority_active,
        }
    }

    /// Idempotently creates the render-side registration for one group.
    pub fn ensure(&mut self, key: &GroupKey) -> Result<(), GroupError> {
        let key_string = key.as_key_string();
        if self.registered.contains(&key_string) {
            return Ok(());
        }
        let highlighter = self.viewer.highlighter()?;
        highlighter.register_group(&key_string, key.style());
        self.registered.insert(key_string);
        Ok(())
    }

    /// Empties one group without touching any dimension toggle state.
    pub fn clear(&mut self, key: &GroupKey) -> Result<(), GroupError> {
        self.ensure(key)?;
        let highlighter = self.viewer.highlighter()?;
        highlighter.clear_group(&key.as_key_string());
        log::debug!(
            "event=group_cleared module=highlight status=ok key={}",
            key.as_key_string()
        );
        Ok(())
    }

    /// Toggles one colorization dimension.
    ///
    /// Inactive-to-active derives group membership from `tasks` (the live
    /// store sequence at call time): tasks with empty selections are
    /// skipped, the rest union their snapshots into the group keyed by
    /// resolved assignee name or priority. Active-to-inactive clears every
    /// group in the dimension regardless of current store contents.
    pub fn set_active(
        &mut self,
        dimension: Dimension,
        active: bool,
        tasks: &[Task],
    ) -> Result<(), GroupError> {
        if self.is_active(dimension) == active {
            log::debug!(
                "event=colorize_toggle module=highlight status=noop dimension={} active={active}",
                dimension.as_str()
            );
            return Ok(());
        }

        if active {
            let members = self.derive_members(dimension, tasks)?;
            // Reset the whole dimension first so membership from an earlier
            // activation never lingers under a now-empty group.
            for key in self.dimension_keys(dimension) {
                self.clear(&key)?;
            }
            let group_count = members.len();
            for (key, selection) in &members {
                self.ensure(key)?;
                let highlighter = self.viewer.highlighter()?;
                highlighter.set_members(&key.as_key_string(), selection);
            }
            self.set_flag(dimension, true);
            log::info!(
                "event=colorize_toggle module=highlight status=ok dimension={} active=true groups={group_count} tasks={}",
                dimension.as_str(),
                tasks.len()
            );
        } else {
            for key in self.dimension_keys(dimension) {
                self.clear(&key)?;
            }
            self.set_flag(dimension, false);
            log::info!(
                "event=colorize_toggle module=highlight status=ok dimension={} active=false",
                dimension.as_str()
            );
        }

        Ok(())
    }

    /// Replaces the transient recall group with exactly this selection.
    pub fn show_recall(&mut self, selection: &SelectionMap) -> Result<(), GroupError> {
        self.ensure(&GroupKey::Recall)?;
        let highlighter = self.viewer.highlighter()?;
        highlighter.set_members(&GroupKey::Recall.as_key_string(), selection);
        log::debug!(
            "event=recall_highlight module=highlight status=ok elements={}",
            selection.element_count()
        );
        Ok(())
    }

    fn set_flag(&mut self, dimension: Dimension, active: bool) {
        match dimension {
            Dimension::Assignee => self.assignee_active = active,
            Dimension::Priority => self.priority_active = active,
        }
    }

    /// Every group key belonging to one dimension: one per roster entry or
    /// one per priority value.
    fn dimension_keys(&self, dimension: Dimension) -> Vec<GroupKey> {
        match dimension {
            Dimension::Assignee => self
                .roster
                .iter()
                .map(|assignee| GroupKey::Assignee(assignee.display_name.clone()))
                .collect(),
            Dimension::Priority => Priority::all()
                .into_iter()
                .map(GroupKey::Priority)
                .collect(),
        }
    }

    fn derive_members(
        &self,
        dimension: Dimension,
        tasks: &[Task],
    ) -> Result<BTreeMap<GroupKey, SelectionMap>, GroupError> {
        let mut members: BTreeMap<GroupKey, SelectionMap> = BTreeMap::new();
        for task in tasks {
            if task.selection.is_empty() {
                continue;
            }
            let key = match dimension {
                Dimension::Assignee => {
                    let assignee = self
                        .roster
                        .get(task.assignee_id)
                        .ok_or(GroupError::UnresolvedAssignee(task.assignee_id))?;
                    GroupKey::Assignee(assignee.display_name.clone())
                }
                Dimension::Priority => GroupKey::Priority(task.priority),
            };
            members.entry(key).or_default().union(&task.selection);
        }
        Ok(members)
    }
}
