//! Note collection persistence.

use crate::model::note::Note;
use crate::storage::{self, SlotStore, StoreResult, NOTES_SLOT};

/// Load/save contract for the note collection.
pub trait NoteRepository {
    /// Loads all notes in insertion order.
    fn load_notes(&self) -> StoreResult<Vec<Note>>;
    /// Replaces the stored collection with `notes`.
    fn save_notes(&self, notes: &[Note]) -> StoreResult<()>;
}

/// Note repository stored in the `eduhub_notes` slot.
#[derive(Debug, Clone)]
pub struct SlotNoteRepository<S: SlotStore> {
    store: S,
}

impl<S: SlotStore> SlotNoteRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: SlotStore> NoteRepository for SlotNoteRepository<S> {
    fn load_notes(&self) -> StoreResult<Vec<Note>> {
        storage::load(&self.store, NOTES_SLOT, Vec::new())
    }

    fn save_notes(&self, notes: &[Note]) -> StoreResult<()> {
        storage::save(&self.store, NOTES_SLOT, notes)
    }
}
