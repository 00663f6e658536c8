// src/lib.rs
//! journal-envelope: at-rest encryption for journal entry content
//!
//! Features:
//! - AES-256-GCM `enc1:` tokens with a fresh random nonce per entry
//! - Fernet fallback for content written before `enc1:`
//! - Keys resolved once from config (raw base64 or PBKDF2 passphrase)
//! - Idempotent migration of legacy plaintext rows
//!
//! ```no_run
//! use journal_envelope::{EnvelopeCodec, KeyConfig};
//!
//! let codec = EnvelopeCodec::new(KeyConfig {
//!     aead_key: Some("QkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkI=".into()),
//!     ..KeyConfig::default()
//! });
//! let token = codec.encrypt_text("I am anxious today");
//! assert!(token.starts_with("enc1:"));
//! assert_eq!(codec.decrypt_text(&token), "I am anxious today");
//! ```

pub mod aliases;
pub mod codec;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod db;
pub mod enums;
pub mod error;
pub mod migrate;
pub mod resolver;
pub mod token;

// Re-export everything users need at the crate root
pub use aliases::AeadKey32;
pub use codec::EnvelopeCodec;
pub use config::{load as load_config, Config, KeyConfig};
pub use enums::{Scheme, TokenKind};
pub use error::{EnvelopeError, Result};
pub use migrate::{migrate_contents, migrate_owner, EntryStore, MigrationReport};
pub use resolver::KeyResolver;
pub use token::{is_probably_encrypted, AeadToken};
