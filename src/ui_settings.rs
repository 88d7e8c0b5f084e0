// src/ui_settings.rs
// Key-value persistence capability for per-user UI state (the browser
// localStorage analog). The tree and row-order logic stay free of I/O;
// hosts hand an implementation to the pieces that opt into persistence.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::db;
use crate::error::StoreError;

pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// --- SQLite-backed store ---

pub struct SqliteSettings {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSettings {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = db::open_connection(path)?;
        Ok(SqliteSettings {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Wraps an existing connection (e.g. an in-memory one in tests),
    /// creating the settings table if needed.
    pub fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        db::init_tables(&conn)?;
        Ok(SqliteSettings {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|e| StoreError::Lock(e.to_string()))
    }
}

impl SettingsStore for SqliteSettings {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.lock()?;
        let value = conn
            .query_row(
                "SELECT value FROM panel_ui_settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO panel_ui_settings (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

// --- In-memory store ---

/// For tests and embedding hosts that have no database.
#[derive(Default)]
pub struct MemorySettings {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        MemorySettings::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sqlite_store_round_trips_and_overwrites() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SqliteSettings::open(&dir.path().join("panel.db")).expect("open store");

        assert_eq!(store.get("expand/centers").expect("get"), None);

        store.set("expand/centers", "[\"1\"]").expect("set");
        assert_eq!(
            store.get("expand/centers").expect("get"),
            Some("[\"1\"]".to_string())
        );

        store.set("expand/centers", "[\"1\",\"2\"]").expect("overwrite");
        assert_eq!(
            store.get("expand/centers").expect("get"),
            Some("[\"1\",\"2\"]".to_string())
        );
    }

    #[test]
    fn sqlite_store_persists_across_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("panel.db");
        {
            let store = SqliteSettings::open(&path).expect("open store");
            store.set("k", "v").expect("set");
        }
        let store = SqliteSettings::open(&path).expect("reopen store");
        assert_eq!(store.get("k").expect("get"), Some("v".to_string()));
    }

    #[test]
    fn memory_store_behaves_like_sqlite() {
        let store = MemorySettings::new();
        assert_eq!(store.get("k").expect("get"), None);
        store.set("k", "v").expect("set");
        assert_eq!(store.get("k").expect("get"), Some("v".to_string()));
    }

    #[test]
    fn from_connection_initializes_tables() {
        let conn = Connection::open_in_memory().expect("in-memory db");
        let store = SqliteSettings::from_connection(conn).expect("wrap connection");
        store.set("k", "v").expect("set");
        assert_eq!(store.get("k").expect("get"), Some("v".to_string()));
    }
}
