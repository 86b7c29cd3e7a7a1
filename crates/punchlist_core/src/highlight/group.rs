//! Group keys, dimensions and style derivation.

use crate::model::task::Priority;
use crate::viewer::ports::HighlightStyle;
use std::collections::hash_map::DefaultHasher;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Reserved key of the single transient recall group.
pub const RECALL_GROUP_KEY: &str = "recall";

/// Render layer for assignee-dimension groups.
const ASSIGNEE_LAYER: u8 = 1;
/// Render layer for priority-dimension groups; draws above assignee groups
/// when both dimensions are active and an element belongs to both.
const PRIORITY_LAYER: u8 = 2;
/// Render layer for the transient recall group; always wins.
const RECALL_LAYER: u8 = 3;

/// Classification axis used to partition tasks into highlight groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Assignee,
    Priority,
}

impl Dimension {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Assignee => "assignee",
            Self::Priority => "priority",
        }
    }
}

/// Namespaced identifier of one highlight group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GroupKey {
    /// Per-assignee colorization group, keyed by roster display name.
    Assignee(String),
    /// Per-priority colorization group.
    Priority(Priority),
    /// The reserved transient group used for single-task recall.
    Recall,
}

impl GroupKey {
    /// Dimension this group belongs to; the recall group belongs to none.
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            Self::Assignee(_) => Some(Dimension::Assignee),
            Self::Priority(_) => Some(Dimension::Priority),
            Self::Recall => None,
        }
    }

    /// Render-side string form: `assignee:<name>`, `priority:<value>` or the
    /// reserved `recall` key.
    pub fn as_key_string(&self) -> String {
        match self {
            Self::Assignee(name) => format!("assignee:{name}"),
            Self::Priority(priority) => format!("priority:{}", priority.as_str()),
            Self::Recall => RECALL_GROUP_KEY.to_string(),
        }
    }

    /// Deterministic visual style for this group.
    ///
    /// Color is derived from the key string so a group keeps the same color
    /// across sessions; the layer encodes the dimension precedence order.
    pub fn style(&self) -> HighlightStyle {
        let layer = match self {
            Self::Assignee(_) => ASSIGNEE_LAYER,
            Self::Priority(_) => PRIORITY_LAYER,
            Self::Recall => RECALL_LAYER,
        };
        HighlightStyle {
            color: derive_color(&self.as_key_string()),
            layer,
        }
    }
}

impl Display for GroupKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key_string())
    }
}

/// Maps a key string onto a stable, reasonably spread RGB color.
fn derive_color(key: &str) -> [u8; 3] {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    let bits = hasher.finish();
    // Keep each channel away from full black so groups stay visible against
    // unlit geometry.
    [
        64 + (bits as u8 % 192),
        64 + ((bits >> 8) as u8 % 192),
        64 + ((bits >> 16) as u8 % 192),
    ]
}
