//! Named-slot storage accessor.
//!
//! # Responsibility
//! - Define the `SlotStore` contract: one raw string per named slot.
//! - Provide `load`/`save` helpers that map slots to typed JSON values.
//!
//! # Invariants
//! - `load` returns the caller's fallback when a slot is absent, blank, or
//!   does not parse as the requested shape. The fallback is never persisted.
//! - `save` fully overwrites the slot; there is no merge or partial update.
//! - Backend transport failures surface as `StoreError`; parse failures do not.

mod memory;
mod sqlite;

pub use memory::MemorySlotStore;
pub use sqlite::SqliteSlotStore;

use crate::db::DbError;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot holding the task collection.
pub const TASKS_SLOT: &str = "eduhub_tasks";
/// Slot holding the note collection.
pub const NOTES_SLOT: &str = "eduhub_notes";

pub type StoreResult<T> = Result<T, StoreError>;

/// Slot backend error.
#[derive(Debug)]
pub enum StoreError {
    /// SQLite transport or bootstrap failure.
    Db(DbError),
    /// Value could not be serialized before writing.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode slot value: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        // Wrapped errors already print their text in `Display`.
        match self {
            Self::Db(err) => err.source(),
            Self::Encode(err) => err.source(),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Raw key/value persistence for named slots.
///
/// Methods take `&self` so one store can back several repositories at once;
/// implementations use interior mutability or a shared connection.
pub trait SlotStore {
    /// Returns the raw slot content, or `None` if the slot was never written.
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>>;
    /// Replaces the slot content.
    fn write_slot(&self, key: &str, raw: &str) -> StoreResult<()>;
    /// Removes the slot; removing a missing slot is not an error.
    fn remove_slot(&self, key: &str) -> StoreResult<()>;
}

impl<T: SlotStore + ?Sized> SlotStore for &T {
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, raw: &str) -> StoreResult<()> {
        (**self).write_slot(key, raw)
    }

    fn remove_slot(&self, key: &str) -> StoreResult<()> {
        (**self).remove_slot(key)
    }
}

/// Reads and decodes one slot, falling back on absent or malformed content.
pub fn load<T, S>(store: &S, key: &str, fallback: T) -> StoreResult<T>
where
    T: DeserializeOwned,
    S: SlotStore + ?Sized,
{
    let Some(raw) = store.read_slot(key)? else {
        debug!("event=slot_load module=storage status=absent key={key}");
        return Ok(fallback);
    };
    if raw.trim().is_empty() {
        debug!("event=slot_load module=storage status=blank key={key}");
        return Ok(fallback);
    }

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(err) => {
            warn!(
                "event=slot_load module=storage status=fallback key={key} bytes={} error={err}",
                raw.len()
            );
            Ok(fallback)
        }
    }
}

/// Encodes `value` and overwrites the slot.
pub fn save<T, S>(store: &S, key: &str, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
    S: SlotStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(StoreError::Encode)?;
    store.write_slot(key, &raw)?;
    debug!(
        "event=slot_save module=storage status=ok key={key} bytes={}",
        raw.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load, save, MemorySlotStore, SlotStore};

    #[test]
    fn load_returns_fallback_for_blank_slot() {
        let store = MemorySlotStore::new();
        store.write_slot("k", "   ").unwrap();
        let value: Vec<u32> = load(&store, "k", vec![7]).unwrap();
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn load_returns_fallback_for_wrong_shape() {
        let store = MemorySlotStore::new();
        store.write_slot("k", r#"{"not":"an array"}"#).unwrap();
        let value: Vec<u32> = load(&store, "k", Vec::new()).unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn fallback_is_not_persisted() {
        let store = MemorySlotStore::new();
        let _: Vec<u32> = load(&store, "k", vec![1, 2]).unwrap();
        assert_eq!(store.read_slot("k").unwrap(), None);
    }

    #[test]
    fn save_overwrites_previous_value() {
        let store = MemorySlotStore::new();
        save(&store, "k", &vec![1, 2, 3]).unwrap();
        save(&store, "k", &vec![9]).unwrap();
        let value: Vec<u32> = load(&store, "k", Vec::new()).unwrap();
        assert_eq!(value, vec![9]);
    }
}
