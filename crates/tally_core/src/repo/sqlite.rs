//! SQLite-backed key-value store.
//!
//! # Invariants
//! - One row per key; `set` is an upsert.
//! - The connection must have been opened through `db::open_db*` so the
//!   `kv_entries` table exists.

use super::kv_repo::{ensure_key, KeyValueStore, StoreError, StoreResult};
use crate::db::migrations::latest_version;
use rusqlite::{params, Connection, OptionalExtension};

/// Durable local store owning its connection.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - Returns `StoreError::Unavailable` when the schema version does not
    ///   match this build.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        let expected = latest_version();
        if version != expected {
            return Err(StoreError::Unavailable(format!(
                "store schema version {version} does not match expected {expected}"
            )));
        }
        Ok(Self { conn })
    }

    /// Exposes the underlying connection for diagnostics and tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        ensure_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        ensure_key(key)?;
        self.conn.execute(
            "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
