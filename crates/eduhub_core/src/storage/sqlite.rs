//! SQLite-backed slot store.
//!
//! # Invariants
//! - One row per slot key in `slots`; writes are upserts.
//! - The connection must come from `db::open_db*` (migrations applied).

use super::{SlotStore, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Slot store over a borrowed, migrated connection.
#[derive(Debug, Clone, Copy)]
pub struct SqliteSlotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Lists written slot keys in ascending order.
    pub fn keys(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM slots ORDER BY key ASC;")?;
        let mut rows = stmt.query([])?;
        let mut keys = Vec::new();
        while let Some(row) = rows.next()? {
            keys.push(row.get("key")?);
        }
        Ok(keys)
    }
}

impl SlotStore for SqliteSlotStore<'_> {
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, key: &str, raw: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, raw],
        )?;
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM slots WHERE key = ?1;", [key])?;
        Ok(())
    }
}
