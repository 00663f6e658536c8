// src/config/mod.rs
//! Configuration system for journal-envelope
//!
//! TOML file + environment overrides. Nothing here is global: callers load a
//! [`Config`] once and hand its [`KeyConfig`] to a resolver.

pub use app::{load, load_from, Config, KeyConfig, Paths};
pub use env::{apply_env_overrides, ENV_AEAD_KEY, ENV_CONFIG, ENV_DB_PATH, ENV_JWT_SECRET};
pub use env::{ENV_LEGACY_KEY, ENV_SALT};

mod app;
mod defaults;
mod env;
