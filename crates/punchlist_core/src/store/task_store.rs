//! Task store contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered, append-only collection of task records.
//! - Expose read access for list rendering and group recomputation.
//!
//! # Invariants
//! - Appended tasks are never mutated, reordered or removed.
//! - All state is process-lifetime only; nothing is persisted.

use crate::model::task::{Task, TaskId};

/// Append-only access to the ordered task sequence.
///
/// Highlight-group recomputation consults this sequence on every activation,
/// so implementations must always serve the live collection, never a cached
/// copy.
pub trait TaskStore {
    /// Appends one record and returns a reference to the stored task.
    fn append(&mut self, task: Task) -> &Task;

    /// All tasks in creation order.
    fn list(&self) -> &[Task];

    /// Looks up one task by id.
    fn get(&self, id: TaskId) -> Option<&Task>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// Process-lifetime task store backing a single viewer session.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: Vec<Task>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskStore for InMemoryTaskStore {
    fn append(&mut self, task: Task) -> &Task {
        self.tasks.push(task);
        let last = self.tasks.len() - 1;
        &self.tasks[last]
    }

    fn list(&self) -> &[Task] {
        &self.tasks
    }

    fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryTaskStore, TaskStore};
    use crate::model::selection::SelectionMap;
    use crate::model::task::{Priority, Task, Viewpoint};

    fn sample_task(description: &str) -> Task {
        Task::new(
            1,
            description,
            Priority::Low,
            Viewpoint::default(),
            SelectionMap::new(),
        )
    }

    #[test]
    fn append_preserves_creation_order() {
        let mut store = InMemoryTaskStore::new();
        store.append(sample_task("first"));
        store.append(sample_task("second"));
        store.append(sample_task("third"));

        let descriptions: Vec<&str> = store
            .list()
            .iter()
            .map(|task| task.description.as_str())
            .collect();
        assert_eq!(descriptions, ["first", "second", "third"]);
    }

    #[test]
    fn get_finds_task_by_id() {
        let mut store = InMemoryTaskStore::new();
        let id = store.append(sample_task("findable")).id;
        store.append(sample_task("other"));

        let found = store.get(id).expect("task should be found");
        assert_eq!(found.description, "findable");
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let store = InMemoryTaskStore::new();
        assert!(store.get(uuid::Uuid::new_v4()).is_none());
        assert!(store.is_empty());
    }
}
