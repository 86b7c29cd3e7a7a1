//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `punchlist_core` wiring without
//!   a real 3D viewer attached.
//! - Keep output deterministic for quick local sanity checks.

use punchlist_core::{
    Assignee, CameraPort, HighlightPort, HighlightResolver, HighlightStyle, Priority, Roster,
    SelectionMap, SelectionPort, TaskBoard, TaskDraft, Vec3, Viewer, ViewerError, Viewpoint,
};
use std::process::ExitCode;
use std::sync::Arc;

/// Stub camera parked at a fixed pose.
struct StubCamera;

impl CameraPort for StubCamera {
    fn pose(&self) -> Option<Viewpoint> {
        Some(Viewpoint::new(
            Vec3::new(12.0, 8.0, 12.0),
            Vec3::new(0.0, 0.0, 0.0),
        ))
    }

    fn set_look_at(&self, viewpoint: &Viewpoint, animate: bool) {
        println!(
            "camera -> position=({:.1},{:.1},{:.1}) animate={animate}",
            viewpoint.position.x, viewpoint.position.y, viewpoint.position.z
        );
    }
}

/// Stub selection with two elements pre-highlighted.
struct StubSelection;

impl SelectionPort for StubSelection {
    fn selected(&self) -> SelectionMap {
        let mut selection = SelectionMap::new();
        selection.insert("demo-model", 10);
        selection.insert("demo-model", 11);
        selection
    }
}

/// Stub highlighter printing every command it receives.
struct StubHighlighter;

impl HighlightPort for StubHighlighter {
    fn register_group(&self, key: &str, style: HighlightStyle) {
        println!("highlighter register key={key} layer={}", style.layer);
    }

    fn set_members(&self, key: &str, members: &SelectionMap) {
        println!(
            "highlighter set key={key} elements={}",
            members.element_count()
        );
    }

    fn clear_group(&self, key: &str) {
        println!("highlighter clear key={key}");
    }
}

struct StubResolver;

impl HighlightResolver for StubResolver {
    fn resolve(&self) -> Result<Arc<dyn HighlightPort>, ViewerError> {
        Ok(Arc::new(StubHighlighter))
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("punchlist_core ping={}", punchlist_core::ping());
    println!("punchlist_core version={}", punchlist_core::core_version());

    let roster = Roster::new(vec![
        Assignee::new(1, "Piotr Ostrouch", "Engineer"),
        Assignee::new(2, "Jan Kowalski", "Construction Manager"),
        Assignee::new(3, "Adam Dobry", "Owner"),
    ])?;
    let viewer = Arc::new(Viewer::initialize(
        Arc::new(StubCamera),
        Arc::new(StubSelection),
        Arc::new(StubResolver),
    )?);
    let mut board = TaskBoard::new(roster, viewer);

    let task = board.create_task(&TaskDraft {
        assignee_name: "Piotr Ostrouch".to_string(),
        description: "Fix wall".to_string(),
        priority: Priority::High,
    })?;
    println!(
        "created task priority={} elements={}",
        task.priority.as_str(),
        task.selection.element_count()
    );

    board.set_colorize_by_assignee(true)?;
    board.set_colorize_by_assignee(false)?;
    board.recall_task(task.id)?;

    for summary in board.summaries() {
        println!(
            "task assignee={} priority={} description={}",
            summary.assignee_name,
            summary.priority.as_str(),
            summary.description
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("punchlist smoke run failed: {err}");
            ExitCode::FAILURE
        }
    }
}
