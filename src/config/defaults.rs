// src/config/defaults.rs
use crate::config::app::{KeyConfig, Paths};
use crate::consts::DEFAULT_JOURNAL_DB;

/// No keys: the codec stores plaintext until something is configured
pub fn default_keys() -> KeyConfig {
    KeyConfig::default()
}

pub fn default_paths() -> Paths {
    Paths {
        journal_db: DEFAULT_JOURNAL_DB.into(),
    }
}
