//! Storage abstraction for document tasks.
//!
//! The [`TaskStore`] trait defines the ordered, id-keyed collection
//! the intake pipeline runs against. There is exactly one production
//! implementation — [`memory::MemoryTaskStore`] — since the system
//! holds no state beyond the process lifetime, but the trait keeps the
//! simulator decoupled from the container and lets tests observe
//! mutations.
//!
//! [`TaskStore::update`] doubles as the stale-callback guard: a timer
//! callback that fires after its task was deleted gets `None` back and
//! must stop without rendering anything.

pub mod memory;

use crate::models::DocumentTask;

/// Ordered, id-keyed collection of tasks.
///
/// Implementations must be `Send + Sync`; all mutation funnels through
/// these methods so the single-writer invariant holds on a
/// multi-threaded runtime.
pub trait TaskStore: Send + Sync {
    /// Append a task, preserving insertion order.
    fn append(&self, task: DocumentTask);

    /// Snapshot of one task by id.
    fn get(&self, id: &str) -> Option<DocumentTask>;

    /// Remove a task by id. Returns `false` when the id is absent.
    fn remove(&self, id: &str) -> bool;

    /// Snapshots of all tasks, in insertion order.
    fn list(&self) -> Vec<DocumentTask>;

    /// Mutate one task in place, returning the post-mutation snapshot.
    ///
    /// Returns `None` without calling `mutate` when the id is absent —
    /// the liveness check every timer callback relies on.
    fn update(
        &self,
        id: &str,
        mutate: &mut dyn FnMut(&mut DocumentTask),
    ) -> Option<DocumentTask>;
}
