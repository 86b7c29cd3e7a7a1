//! Shared mock viewer ports for integration tests.

#![allow(dead_code)]

use punchlist_core::{
    Assignee, CameraPort, HighlightPort, HighlightResolver, HighlightStyle, Roster, SelectionMap,
    SelectionPort, Vec3, Viewer, ViewerError, Viewpoint,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Scripted camera recording every look-at command.
pub struct MockCamera {
    pose: Mutex<Option<Viewpoint>>,
    look_at_calls: Mutex<Vec<(Viewpoint, bool)>>,
}

impl MockCamera {
    pub fn with_pose(pose: Viewpoint) -> Self {
        Self {
            pose: Mutex::new(Some(pose)),
            look_at_calls: Mutex::new(Vec::new()),
        }
    }

    /// Camera that cannot report a pose, for configuration-error paths.
    pub fn without_pose() -> Self {
        Self {
            pose: Mutex::new(None),
            look_at_calls: Mutex::new(Vec::new()),
        }
    }

    /// Simulates the user moving the camera.
    pub fn move_to(&self, pose: Viewpoint) {
        *self.pose.lock().expect("camera pose lock") = Some(pose);
    }

    pub fn last_look_at(&self) -> Option<(Viewpoint, bool)> {
        self.look_at_calls
            .lock()
            .expect("look-at lock")
            .last()
            .copied()
    }

    pub fn look_at_count(&self) -> usize {
        self.look_at_calls.lock().expect("look-at lock").len()
    }
}

impl CameraPort for MockCamera {
    fn pose(&self) -> Option<Viewpoint> {
        *self.pose.lock().expect("camera pose lock")
    }

    fn set_look_at(&self, viewpoint: &Viewpoint, animate: bool) {
        self.look_at_calls
            .lock()
            .expect("look-at lock")
            .push((*viewpoint, animate));
        *self.pose.lock().expect("camera pose lock") = Some(*viewpoint);
    }
}

/// Scriptable current-selection source.
#[derive(Default)]
pub struct MockSelection {
    current: Mutex<SelectionMap>,
}

impl MockSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the user highlighting a different element set.
    pub fn set(&self, selection: SelectionMap) {
        *self.current.lock().expect("selection lock") = selection;
    }
}

impl SelectionPort for MockSelection {
    fn selected(&self) -> SelectionMap {
        self.current.lock().expect("selection lock").clone()
    }
}

/// Recording highlight renderer stand-in.
#[derive(Default)]
pub struct MockHighlighter {
    registered: Mutex<BTreeMap<String, HighlightStyle>>,
    members: Mutex<BTreeMap<String, SelectionMap>>,
    set_members_calls: Mutex<Vec<String>>,
}

impl MockHighlighter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self, key: &str) -> bool {
        self.registered
            .lock()
            .expect("registered lock")
            .contains_key(key)
    }

    pub fn style_of(&self, key: &str) -> Option<HighlightStyle> {
        self.registered.lock().expect("registered lock").get(key).copied()
    }

    /// Current membership of one group; empty when never set or cleared.
    pub fn members_of(&self, key: &str) -> SelectionMap {
        self.members
            .lock()
            .expect("members lock")
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of `set_members` commands issued against one group.
    pub fn set_members_count(&self, key: &str) -> usize {
        self.set_members_calls
            .lock()
            .expect("calls lock")
            .iter()
            .filter(|called| called.as_str() == key)
            .count()
    }
}

impl HighlightPort for MockHighlighter {
    fn register_group(&self, key: &str, style: HighlightStyle) {
        self.registered
            .lock()
            .expect("registered lock")
            .entry(key.to_string())
            .or_insert(style);
    }

    fn set_members(&self, key: &str, members: &SelectionMap) {
        self.set_members_calls
            .lock()
            .expect("calls lock")
            .push(key.to_string());
        self.members
            .lock()
            .expect("members lock")
            .insert(key.to_string(), members.clone());
    }

    fn clear_group(&self, key: &str) {
        self.members
            .lock()
            .expect("members lock")
            .insert(key.to_string(), SelectionMap::new());
    }
}

/// Resolver handing out an already-built highlighter.
pub struct DirectResolver {
    highlighter: Arc<MockHighlighter>,
}

impl DirectResolver {
    pub fn new(highlighter: Arc<MockHighlighter>) -> Self {
        Self { highlighter }
    }
}

impl HighlightResolver for DirectResolver {
    fn resolve(&self) -> Result<Arc<dyn HighlightPort>, ViewerError> {
        Ok(self.highlighter.clone())
    }
}

/// Fully wired mock viewer rig.
pub struct MockRig {
    pub viewer: Arc<Viewer>,
    pub camera: Arc<MockCamera>,
    pub selection: Arc<MockSelection>,
    pub highlighter: Arc<MockHighlighter>,
}

pub fn default_pose() -> Viewpoint {
    Viewpoint::new(Vec3::new(10.0, 5.0, 10.0), Vec3::new(0.0, 0.0, 0.0))
}

/// Builds a viewer over mock ports with a reporting camera.
pub fn mock_rig() -> MockRig {
    let camera = Arc::new(MockCamera::with_pose(default_pose()));
    let selection = Arc::new(MockSelection::new());
    let highlighter = Arc::new(MockHighlighter::new());
    let viewer = Viewer::initialize(
        camera.clone(),
        selection.clone(),
        Arc::new(DirectResolver::new(highlighter.clone())),
    )
    .expect("mock viewer initializes");
    MockRig {
        viewer: Arc::new(viewer),
        camera,
        selection,
        highlighter,
    }
}

/// Two-entry roster used by the scenario tests.
pub fn roster_ab() -> Roster {
    Roster::new(vec![
        Assignee::new(1, "A", "Engineer"),
        Assignee::new(2, "B", "Construction Manager"),
    ])
    .expect("valid roster")
}

/// Selection snapshot `{model-x: [10, 11]}`.
pub fn selection_model_x() -> SelectionMap {
    let mut selection = SelectionMap::new();
    selection.insert("model-x", 10);
    selection.insert("model-x", 11);
    selection
}
