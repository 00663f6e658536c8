// src/config/env.rs
//! Environment variable overrides
//!
//! Variable names match the ones the journal backend has always read, so an
//! existing deployment keeps resolving the same keys.

use super::app::Config;

pub const ENV_CONFIG: &str = "JOURNAL_ENVELOPE_CONFIG";
pub const ENV_AEAD_KEY: &str = "JOURNAL_KEY";
/// Alias for the AEAD key, and the primary legacy key variable
pub const ENV_LEGACY_KEY: &str = "JOURNAL_ENC_KEY";
pub const ENV_SALT: &str = "JOURNAL_SALT";
/// Salt source for PBKDF2, and the legacy key alias
pub const ENV_JWT_SECRET: &str = "JWT_SECRET";
pub const ENV_DB_PATH: &str = "JOURNAL_DB_PATH";

/// Overwrite config values with non-empty variables from `lookup`
pub fn apply_env_overrides<F>(conf: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

    if let Some(key) = get(ENV_AEAD_KEY).or_else(|| get(ENV_LEGACY_KEY)) {
        conf.keys.aead_key = Some(key);
    }
    if let Some(salt) = get(ENV_SALT) {
        conf.keys.salt = Some(salt);
    }
    if let Some(secret) = get(ENV_JWT_SECRET) {
        conf.keys.fallback_secret = Some(secret);
    }
    if let Some(key) = get(ENV_LEGACY_KEY).or_else(|| get(ENV_JWT_SECRET)) {
        conf.keys.legacy_key = Some(key);
    }
    if let Some(path) = get(ENV_DB_PATH) {
        conf.paths.journal_db = path;
    }
}
