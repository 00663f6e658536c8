// src/db/entry_db_ops.rs
//! Journal entry storage operations
//!
//! `SqliteEntryStore` is the [`EntryStore`] the migration runs against. It
//! knows nothing about encryption: content goes in and out exactly as given.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;
use crate::migrate::{EntryStore, OwnerId, OwnerScope, StoredContent};

#[derive(Debug, Clone, Default)]
pub struct NewEntry<'a> {
    pub owner: Option<OwnerId>,
    pub content: &'a str,
    pub title: Option<&'a str>,
    pub mood: Option<&'a str>,
    pub private: bool,
}

pub struct SqliteEntryStore {
    conn: Connection,
}

impl SqliteEntryStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Insert a row and return its id
    pub fn insert_entry(&self, entry: &NewEntry<'_>) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO journalentry (content, created_at, private, mood, title, user_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entry.content,
                Utc::now().to_rfc3339(),
                entry.private,
                entry.mood,
                entry.title,
                entry.owner,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn entry_content(&self, id: i64) -> Result<Option<String>> {
        Ok(self
            .conn
            .query_row(
                "SELECT content FROM journalentry WHERE id = ?1",
                [id],
                |row| row.get(0),
            )
            .optional()?)
    }

    /// Distinct owners that have at least one entry; `None` first when
    /// unowned entries exist
    pub fn owners(&self) -> Result<Vec<OwnerScope>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT user_id FROM journalentry ORDER BY user_id")?;
        let owners = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<OwnerScope>>>()?;
        Ok(owners)
    }
}

impl EntryStore for SqliteEntryStore {
    fn load_contents(&mut self, owner: OwnerScope) -> Result<Vec<StoredContent>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, content FROM journalentry WHERE user_id IS ?1 ORDER BY id")?;
        let rows = stmt
            .query_map([owner], |row| {
                Ok(StoredContent {
                    id: row.get(0)?,
                    content: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    fn commit_contents(&mut self, owner: OwnerScope, updates: &[StoredContent]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt =
                tx.prepare("UPDATE journalentry SET content = ?1 WHERE id = ?2 AND user_id IS ?3")?;
            for row in updates {
                stmt.execute(params![row.content, row.id, owner])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
