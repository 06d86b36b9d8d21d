//! SQLite-backed store.
//!
//! Values live in a single `kv` table keyed by `StoreKey::as_str()`, so the
//! database can be inspected with any sqlite client.

use std::fs;
use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use super::{KeyValueStore, StoreError, StoreKey};

/// File name of the database inside the data directory
pub const DB_FILE_NAME: &str = "wheel.db";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database inside `data_dir`
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(data_dir)?;
        let conn = Connection::open(data_dir.join(DB_FILE_NAME))?;
        Self::with_connection(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key.as_str(), value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_get_missing_key() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get(StoreKey::HeaderText).unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_value() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set(StoreKey::HeaderText, "first").unwrap();
        store.set(StoreKey::HeaderText, "second").unwrap();
        assert_eq!(
            store.get(StoreKey::HeaderText).unwrap(),
            Some("second".to_string())
        );
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        {
            let mut store = SqliteStore::open(dir.path()).unwrap();
            store
                .set(StoreKey::CandidateList, r#"["Alice","Bob"]"#)
                .unwrap();
        }

        let store = SqliteStore::open(dir.path()).unwrap();
        assert_eq!(
            store.get(StoreKey::CandidateList).unwrap(),
            Some(r#"["Alice","Bob"]"#.to_string())
        );
        assert!(dir.path().join(DB_FILE_NAME).exists());
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = SqliteStore::open(&nested);
        assert!(store.is_ok());
        assert!(nested.join(DB_FILE_NAME).exists());
    }
}
