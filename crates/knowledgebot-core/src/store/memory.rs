//! In-memory [`TaskStore`] implementation.
//!
//! A `Vec` behind `std::sync::RwLock`: insertion order is the vector
//! order, lookups scan linearly. The collections involved are demo
//! sized, so no index is kept.

use std::sync::RwLock;

use crate::models::DocumentTask;

use super::TaskStore;

/// The production task store. All state is lost on drop.
pub struct MemoryTaskStore {
    tasks: RwLock<Vec<DocumentTask>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for MemoryTaskStore {
    fn append(&self, task: DocumentTask) {
        self.tasks.write().unwrap().push(task);
    }

    fn get(&self, id: &str) -> Option<DocumentTask> {
        self.tasks
            .read()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    fn remove(&self, id: &str) -> bool {
        let mut tasks = self.tasks.write().unwrap();
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        tasks.len() != before
    }

    fn list(&self) -> Vec<DocumentTask> {
        self.tasks.read().unwrap().clone()
    }

    fn update(
        &self,
        id: &str,
        mutate: &mut dyn FnMut(&mut DocumentTask),
    ) -> Option<DocumentTask> {
        let mut tasks = self.tasks.write().unwrap();
        let task = tasks.iter_mut().find(|t| t.id == id)?;
        mutate(task);
        Some(task.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileMeta, TaskStatus};

    fn task(name: &str) -> DocumentTask {
        DocumentTask::new(FileMeta {
            name: name.to_string(),
            size: 100,
            media_type: "text/plain".to_string(),
        })
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = MemoryTaskStore::new();
        for name in ["first.txt", "second.txt", "third.txt"] {
            store.append(task(name));
        }
        let names: Vec<String> = store.list().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["first.txt", "second.txt", "third.txt"]);
    }

    #[test]
    fn get_and_remove_by_id() {
        let store = MemoryTaskStore::new();
        let t = task("a.txt");
        let id = t.id.clone();
        store.append(t);

        assert!(store.get(&id).is_some());
        assert!(store.remove(&id));
        assert!(store.get(&id).is_none());
        assert!(!store.remove(&id));
    }

    #[test]
    fn update_returns_post_mutation_snapshot() {
        let store = MemoryTaskStore::new();
        let t = task("a.txt");
        let id = t.id.clone();
        store.append(t);

        let snapshot = store
            .update(&id, &mut |task| {
                task.progress = 42.0;
                task.advance_status(TaskStatus::Processing);
            })
            .unwrap();
        assert_eq!(snapshot.progress, 42.0);
        assert_eq!(snapshot.status, TaskStatus::Processing);
        assert_eq!(store.get(&id).unwrap().progress, 42.0);
    }

    #[test]
    fn update_on_removed_task_is_a_noop() {
        let store = MemoryTaskStore::new();
        let t = task("a.txt");
        let id = t.id.clone();
        store.append(t);
        store.remove(&id);

        let mut called = false;
        let result = store.update(&id, &mut |_| called = true);
        assert!(result.is_none());
        assert!(!called);
    }
}
