// src/aliases.rs
//! Secret types used throughout journal-envelope
//!
//! All of them zeroize on drop and print as `[REDACTED]`; read the value
//! with [`ExposeSecret::expose_secret`].

pub use secrecy::{ExposeSecret, SecretBox, SecretSlice, SecretString};

use crate::consts::AEAD_KEY_LEN;

/// 256-bit AES-GCM key for enc1 tokens
pub type AeadKey32 = SecretBox<[u8; AEAD_KEY_LEN]>;

/// JOURNAL_KEY when it is not a raw base64 key
pub type Passphrase = SecretString;

/// PBKDF2 salt, never stored with ciphertext
pub type SaltBytes = SecretSlice<u8>;

/// Fernet key in its native url-safe base64 form
pub type LegacyKeyB64 = SecretString;

/// Copy a decoded key into a boxed secret; `None` unless exactly 32 bytes
pub fn aead_key_from_slice(bytes: &[u8]) -> Option<AeadKey32> {
    if bytes.len() != AEAD_KEY_LEN {
        return None;
    }
    Some(SecretBox::init_with_mut(|key: &mut [u8; AEAD_KEY_LEN]| {
        key.copy_from_slice(bytes)
    }))
}
