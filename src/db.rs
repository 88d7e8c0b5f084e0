// src/db.rs
use log::info;
use rusqlite::Connection;
use std::path::Path;

use crate::error::StoreError;

pub fn open_connection(path: &Path) -> Result<Connection, StoreError> {
    let conn = Connection::open(path)?;
    init_tables(&conn)?;
    info!("ui settings database opened at {}", path.display());
    Ok(conn)
}

// Idempotent; safe to run on every open.
pub fn init_tables(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS panel_ui_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
