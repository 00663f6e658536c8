// src/consts.rs
//! Shared constants: security parameters, token prefixes and defaults

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;

/// Prefix of AES-256-GCM envelope tokens
pub const AEAD_TOKEN_PREFIX: &str = "enc1:";

/// Every Fernet token starts with version byte 0x80 and a zero-led timestamp
pub const LEGACY_TOKEN_PREFIX: &str = "gAAAA";

/// Shortest value `is_probably_encrypted` will accept
pub const MIN_TOKEN_LEN: usize = 8;

/// AES-256-GCM key length in bytes
pub const AEAD_KEY_LEN: usize = 32;

/// AES-GCM nonce length in bytes (96 bits)
pub const AEAD_NONCE_LEN: usize = 12;

/// PBKDF2-HMAC-SHA256 rounds for passphrase-derived AEAD keys
// Fixed: existing enc1 tokens were sealed with keys derived at this count
pub const PBKDF2_ITERATIONS: u32 = 390_000;

/// Length of a 32-byte key in url-safe base64 without padding.
/// Shorter legacy key values are treated as passphrases.
pub const LEGACY_KEY_ENCODED_LEN: usize = 43;

/// Salt used when neither JOURNAL_SALT nor JWT_SECRET is configured
pub const DEFAULT_FALLBACK_SALT: &str = "manna-default-salt";

/// Default location of the TOML config file
pub const DEFAULT_CONFIG_PATH: &str = "journal-envelope.toml";

/// Default SQLite journal database
pub const DEFAULT_JOURNAL_DB: &str = "journal.db";

/// Token payloads: written without padding, read with or without it.
/// Trailing bits must be canonical so every payload byte is authenticated.
pub(crate) const TOKEN_B64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Configured keys and salts: padding required, stray trailing bits tolerated
pub(crate) const CONFIG_B64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);
