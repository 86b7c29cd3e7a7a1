//! Viewer handle: capability wiring, pose capture and selection snapshots.
//!
//! # Responsibility
//! - Verify required camera capabilities once, at initialization.
//! - Capture viewpoint and selection snapshots synchronously.
//! - Resolve the highlighting engine lazily, exactly once.
//!
//! # Invariants
//! - Capture reads run against the viewer state the user last observed; no
//!   deferred work may be interposed between user confirmation and capture.
//! - Highlighter resolution failures surface as errors; they are never
//!   retried with a different resolver.

use crate::model::selection::SelectionMap;
use crate::model::task::Viewpoint;
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub mod ports;

pub use ports::{CameraPort, HighlightPort, HighlightResolver, HighlightStyle, SelectionPort};

/// Viewer capability and acquisition errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// The camera rig cannot report position and look-target. Fatal at
    /// initialization time; tasks cannot bind viewpoints without it.
    PoseUnsupported,
    /// The highlighting engine handle could not be resolved.
    HighlighterUnavailable(String),
}

impl Display for ViewerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PoseUnsupported => {
                write!(f, "camera does not support pose capture")
            }
            Self::HighlighterUnavailable(reason) => {
                write!(f, "highlighting engine unavailable: {reason}")
            }
        }
    }
}

impl Error for ViewerError {}

/// Handle over the external viewer capabilities this crate consumes.
pub struct Viewer {
    camera: Arc<dyn CameraPort>,
    selection: Arc<dyn SelectionPort>,
    resolver: Arc<dyn HighlightResolver>,
    highlighter: OnceCell<Arc<dyn HighlightPort>>,
}

impl Viewer {
    /// Wires up the viewer ports and runs the fatal capability check: a
    /// camera that cannot report a pose is a configuration error, rejected
    /// here rather than per task.
    pub fn initialize(
        camera: Arc<dyn CameraPort>,
        selection: Arc<dyn SelectionPort>,
        resolver: Arc<dyn HighlightResolver>,
    ) -> Result<Self, ViewerError> {
        if camera.pose().is_none() {
            log::error!("event=viewer_init module=viewer status=error reason=pose_unsupported");
            return Err(ViewerError::PoseUnsupported);
        }
        log::info!("event=viewer_init module=viewer status=ok");
        Ok(Self {
            camera,
            selection,
            resolver,
            highlighter: OnceCell::new(),
        })
    }

    /// Reads the camera pose at the moment of the call.
    ///
    /// Must run synchronously with respect to task creation: capturing after
    /// any deferred gap risks recording a viewpoint the user no longer sees.
    pub fn capture_viewpoint(&self) -> Result<Viewpoint, ViewerError> {
        self.camera.pose().ok_or(ViewerError::PoseUnsupported)
    }

    /// Reads the currently highlighted element set. Empty is a valid,
    /// not erroneous, outcome.
    pub fn capture_selection(&self) -> SelectionMap {
        self.selection.selected()
    }

    /// Camera command access for viewpoint restoration.
    pub fn camera(&self) -> &Arc<dyn CameraPort> {
        &self.camera
    }

    /// Highlighting engine handle, resolved on first use and cached for the
    /// rest of the session.
    pub fn highlighter(&self) -> Result<&Arc<dyn HighlightPort>, ViewerError> {
        self.highlighter.get_or_try_init(|| {
            let handle = self.resolver.resolve();
            match &handle {
                Ok(_) => log::debug!("event=highlighter_resolved module=viewer status=ok"),
                Err(err) => log::error!(
                    "event=highlighter_resolved module=viewer status=error reason={err}"
                ),
            }
            handle
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{CameraPort, HighlightPort, HighlightResolver, SelectionPort, Viewer, ViewerError};
    use crate::model::selection::SelectionMap;
    use crate::model::task::{Vec3, Viewpoint};
    use crate::viewer::ports::HighlightStyle;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FixedCamera {
        pose: Option<Viewpoint>,
    }

    impl CameraPort for FixedCamera {
        fn pose(&self) -> Option<Viewpoint> {
            self.pose
        }

        fn set_look_at(&self, _viewpoint: &Viewpoint, _animate: bool) {}
    }

    struct EmptySelection;

    impl SelectionPort for EmptySelection {
        fn selected(&self) -> SelectionMap {
            SelectionMap::new()
        }
    }

    struct NullHighlighter;

    impl HighlightPort for NullHighlighter {
        fn register_group(&self, _key: &str, _style: HighlightStyle) {}
        fn set_members(&self, _key: &str, _members: &SelectionMap) {}
        fn clear_group(&self, _key: &str) {}
    }

    struct CountingResolver {
        calls: AtomicUsize,
    }

    impl HighlightResolver for CountingResolver {
        fn resolve(&self) -> Result<Arc<dyn HighlightPort>, ViewerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(NullHighlighter))
        }
    }

    fn pose() -> Viewpoint {
        Viewpoint::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, 0.0))
    }

    #[test]
    fn initialize_rejects_camera_without_pose() {
        let result = Viewer::initialize(
            Arc::new(FixedCamera { pose: None }),
            Arc::new(EmptySelection),
            Arc::new(CountingResolver {
                calls: AtomicUsize::new(0),
            }),
        );
        assert_eq!(result.err(), Some(ViewerError::PoseUnsupported));
    }

    #[test]
    fn capture_reads_current_pose() {
        let viewer = Viewer::initialize(
            Arc::new(FixedCamera { pose: Some(pose()) }),
            Arc::new(EmptySelection),
            Arc::new(CountingResolver {
                calls: AtomicUsize::new(0),
            }),
        )
        .expect("viewer initializes");

        assert_eq!(viewer.capture_viewpoint().expect("pose captured"), pose());
        assert!(viewer.capture_selection().is_empty());
    }

    #[test]
    fn highlighter_is_resolved_exactly_once() {
        let resolver = Arc::new(CountingResolver {
            calls: AtomicUsize::new(0),
        });
        let viewer = Viewer::initialize(
            Arc::new(FixedCamera { pose: Some(pose()) }),
            Arc::new(EmptySelection),
            resolver.clone(),
        )
        .expect("viewer initializes");

        viewer.highlighter().expect("first acquisition");
        viewer.highlighter().expect("cached acquisition");
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
    }
}
