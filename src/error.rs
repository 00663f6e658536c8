// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

use crate::enums::Scheme;

pub type Result<T> = std::result::Result<T, EnvelopeError>;

#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// Normal configuration state: nothing usable is configured for the scheme
    #[error("no key material configured for {0}")]
    KeyUnavailable(Scheme),

    #[error("key derivation failed: {0}")]
    Derivation(String),

    #[error("sealing with {0} failed")]
    Encryption(Scheme),

    /// Wrong key, tampered ciphertext or a tag that does not verify
    #[error("{0} token failed authentication")]
    Authentication(Scheme),

    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("no encryption scheme is configured")]
    NoSchemeConfigured,

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
