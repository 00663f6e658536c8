// tests/support.rs
//! Key fixtures and throwaway journal databases

use journal_envelope::db::{open_entry_db, NewEntry, SqliteEntryStore};
use journal_envelope::migrate::OwnerId;
use journal_envelope::KeyConfig;
use tempfile::TempDir;

/// url-safe base64 of 32 × 0x42
#[allow(dead_code)]
pub const STATIC_KEY_B64: &str = "QkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkI=";

#[allow(dead_code)]
pub const LEGACY_PASSPHRASE: &str = "grateful-passphrase";

#[allow(dead_code)]
pub fn aead_config() -> KeyConfig {
    KeyConfig {
        aead_key: Some(STATIC_KEY_B64.into()),
        ..KeyConfig::default()
    }
}

#[allow(dead_code)]
pub fn legacy_config() -> KeyConfig {
    KeyConfig {
        legacy_key: Some(LEGACY_PASSPHRASE.into()),
        ..KeyConfig::default()
    }
}

/// Both schemes configured; new content goes to enc1
#[allow(dead_code)]
pub fn dual_config() -> KeyConfig {
    KeyConfig {
        aead_key: Some(STATIC_KEY_B64.into()),
        legacy_key: Some(LEGACY_PASSPHRASE.into()),
        ..KeyConfig::default()
    }
}

/// Journal database in a fresh temp dir; keep the `TempDir` alive
#[allow(dead_code)]
pub struct TestJournal {
    pub store: SqliteEntryStore,
    pub dir: TempDir,
}

impl TestJournal {
    #[allow(dead_code)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let conn = open_entry_db(dir.path().join("journal.db")).expect("open journal db");
        Self {
            store: SqliteEntryStore::new(conn),
            dir,
        }
    }

    #[allow(dead_code)]
    pub fn add(&self, owner: OwnerId, content: &str) -> i64 {
        self.store
            .insert_entry(&NewEntry {
                owner: Some(owner),
                content,
                ..NewEntry::default()
            })
            .expect("insert entry")
    }

    #[allow(dead_code)]
    pub fn content(&self, id: i64) -> String {
        self.store
            .entry_content(id)
            .expect("query entry")
            .expect("entry exists")
    }
}
