//! Task collection persistence.

use crate::model::task::Task;
use crate::storage::{self, SlotStore, StoreResult, TASKS_SLOT};

/// Load/save contract for the task collection.
pub trait TaskRepository {
    /// Loads all tasks in insertion order.
    fn load_tasks(&self) -> StoreResult<Vec<Task>>;
    /// Replaces the stored collection with `tasks`.
    fn save_tasks(&self, tasks: &[Task]) -> StoreResult<()>;
}

/// Task repository stored in the `eduhub_tasks` slot.
#[derive(Debug, Clone)]
pub struct SlotTaskRepository<S: SlotStore> {
    store: S,
}

impl<S: SlotStore> SlotTaskRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: SlotStore> TaskRepository for SlotTaskRepository<S> {
    fn load_tasks(&self) -> StoreResult<Vec<Task>> {
        storage::load(&self.store, TASKS_SLOT, Vec::new())
    }

    fn save_tasks(&self, tasks: &[Task]) -> StoreResult<()> {
        storage::save(&self.store, TASKS_SLOT, tasks)
    }
}
