//! Capability ports provided by the external 3D-viewer subsystem.
//!
//! # Responsibility
//! - Declare the camera, selection and highlight contracts this crate
//!   consumes without owning any rendering state.
//!
//! # Invariants
//! - Ports are read/command interfaces; implementations own all scene state.
//! - `HighlightPort` calls are idempotent per `(key, members)` pair.

use crate::model::selection::SelectionMap;
use crate::model::task::Viewpoint;
use crate::viewer::ViewerError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Access to the viewer camera rig.
pub trait CameraPort: Send + Sync {
    /// Current camera pose, or `None` when the underlying rig cannot report
    /// position and look-target.
    fn pose(&self) -> Option<Viewpoint>;

    /// Drives the camera to the given pose, optionally animated.
    fn set_look_at(&self, viewpoint: &Viewpoint, animate: bool);
}

/// Read-only access to the currently highlighted element set.
pub trait SelectionPort: Send + Sync {
    /// Snapshot of the current selection, keyed by model identifier.
    /// An empty map means nothing is selected.
    fn selected(&self) -> SelectionMap;
}

/// Visual style of one named highlight group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightStyle {
    /// RGB fill color applied to group members.
    pub color: [u8; 3],
    /// Render layer ordinal; higher layers draw above lower ones when an
    /// element belongs to groups in several layers.
    pub layer: u8,
}

/// Command interface of the element-highlighting renderer.
pub trait HighlightPort: Send + Sync {
    /// Registers a named group with its style. Repeat registration of the
    /// same key is a no-op.
    fn register_group(&self, key: &str, style: HighlightStyle);

    /// Replaces the full membership of one group.
    fn set_members(&self, key: &str, members: &SelectionMap);

    /// Removes all visual membership of one group.
    fn clear_group(&self, key: &str);
}

/// One-time acquisition of the highlighting engine handle.
///
/// The engine may not be ready when the viewer is wired up; resolution is
/// deferred to the first entry point that needs it.
pub trait HighlightResolver: Send + Sync {
    fn resolve(&self) -> Result<Arc<dyn HighlightPort>, ViewerError>;
}
