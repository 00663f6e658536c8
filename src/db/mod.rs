// src/db/mod.rs
//! SQLite adapter for the journal entry table
pub mod entry_db_conn;
pub mod entry_db_ops;

pub use entry_db_conn::{open_entry_db, open_entry_db_in_memory};
pub use entry_db_ops::{NewEntry, SqliteEntryStore};
