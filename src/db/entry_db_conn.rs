// src/db/entry_db_conn.rs
use std::{fs, path::Path};

use rusqlite::Connection;

use crate::error::Result;

const CREATE_ENTRY_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS journalentry (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        content    TEXT NOT NULL,
        created_at TEXT NOT NULL,
        private    INTEGER NOT NULL DEFAULT 0,
        mood       TEXT,
        title      TEXT,
        user_id    INTEGER
    );

    CREATE INDEX IF NOT EXISTS ix_journalentry_created_at ON journalentry(created_at);
"#;

/// Open (or create) the journal database at `db_path`
pub fn open_entry_db<P: AsRef<Path>>(db_path: P) -> Result<Connection> {
    if let Some(parent) = db_path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(db_path)?;
    prepare(&conn)?;
    Ok(conn)
}

pub fn open_entry_db_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    prepare(&conn)?;
    Ok(conn)
}

fn prepare(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CREATE_ENTRY_TABLE)?;

    // Databases written before per-user scoping lack the column
    let has_user_id = conn
        .prepare("SELECT 1 FROM pragma_table_info('journalentry') WHERE name = 'user_id'")?
        .exists([])?;
    if !has_user_id {
        conn.execute_batch("ALTER TABLE journalentry ADD COLUMN user_id INTEGER;")?;
    }
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS ix_journalentry_user_id ON journalentry(user_id);",
    )?;
    Ok(())
}
