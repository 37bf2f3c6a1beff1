//! In-memory slot store for tests and throwaway sessions.

use super::{SlotStore, StoreResult};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Slot store backed by a shared map.
///
/// Clones share the same map, so a test can hand one clone to a controller
/// and inspect the slots through another.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots currently written.
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl SlotStore for MemorySlotStore {
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, raw: &str) -> StoreResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> StoreResult<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}
