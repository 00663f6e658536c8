// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Cipher schemes and the token classification derived from a prefix.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{AEAD_TOKEN_PREFIX, LEGACY_TOKEN_PREFIX};

/// Supported cipher schemes, in default priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// AES-256-GCM, `enc1:` tokens
    Aead,
    /// Fernet, `gAAAA` tokens
    Legacy,
}

impl Scheme {
    pub const fn prefix(self) -> &'static str {
        match self {
            Scheme::Aead => AEAD_TOKEN_PREFIX,
            Scheme::Legacy => LEGACY_TOKEN_PREFIX,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Scheme::Aead => "aes-256-gcm",
            Scheme::Legacy => "fernet",
        })
    }
}

/// What a stored content value looks like, judged by its prefix alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Plaintext,
    Aead,
    Legacy,
}

impl TokenKind {
    pub fn classify(value: &str) -> Self {
        if value.starts_with(AEAD_TOKEN_PREFIX) {
            TokenKind::Aead
        } else if value.starts_with(LEGACY_TOKEN_PREFIX) {
            TokenKind::Legacy
        } else {
            TokenKind::Plaintext
        }
    }
}
