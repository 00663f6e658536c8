// src/config/app.rs
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::{default_keys, default_paths};
use super::env::{apply_env_overrides, ENV_CONFIG};
use crate::consts::DEFAULT_CONFIG_PATH;
use crate::error::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_keys")]
    pub keys: KeyConfig,
    #[serde(default = "default_paths")]
    pub paths: Paths,
}

/// Raw key configuration strings. Empty strings count as absent.
#[derive(Clone, Default, Deserialize)]
pub struct KeyConfig {
    /// Base64 32-byte key or passphrase for the AEAD scheme
    #[serde(default)]
    pub aead_key: Option<String>,
    /// PBKDF2 salt, base64 or raw
    #[serde(default)]
    pub salt: Option<String>,
    /// Secret whose bytes salt PBKDF2 when no salt is configured
    #[serde(default)]
    pub fallback_secret: Option<String>,
    /// Fernet key or passphrase for the legacy scheme
    #[serde(default)]
    pub legacy_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    pub journal_db: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            keys: default_keys(),
            paths: default_paths(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl KeyConfig {
    pub fn aead_key(&self) -> Option<&str> {
        non_empty(&self.aead_key)
    }

    pub fn salt(&self) -> Option<&str> {
        non_empty(&self.salt)
    }

    pub fn fallback_secret(&self) -> Option<&str> {
        non_empty(&self.fallback_secret)
    }

    pub fn legacy_key(&self) -> Option<&str> {
        non_empty(&self.legacy_key)
    }

    /// Key configuration taken from the process environment only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        apply_env_overrides(&mut config, |name| std::env::var(name).ok());
        config.keys
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl fmt::Debug for KeyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: Option<&str>| v.map(|_| "[REDACTED]");
        f.debug_struct("KeyConfig")
            .field("aead_key", &redact(self.aead_key()))
            .field("salt", &redact(self.salt()))
            .field("fallback_secret", &redact(self.fallback_secret()))
            .field("legacy_key", &redact(self.legacy_key()))
            .finish()
    }
}

/// Load config from `$JOURNAL_ENVELOPE_CONFIG` (or the default path), then
/// apply environment overrides. A missing file falls back to built-in defaults.
pub fn load() -> Result<Config> {
    let config_path =
        std::env::var(ENV_CONFIG).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_from(Path::new(&config_path), |name| std::env::var(name).ok())
}

/// Same as [`load`] with an explicit file and variable lookup
pub fn load_from<F>(path: &Path, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut conf = if path.exists() {
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loaded config file");
        Config::from_toml_str(&content)?
    } else {
        warn!(path = %path.display(), "config file not found, using built-in defaults");
        Config::default()
    };

    apply_env_overrides(&mut conf, lookup);
    Ok(conf)
}
