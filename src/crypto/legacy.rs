// src/crypto/legacy.rs
//! Fernet tokens: the format content was stored in before `enc1:`
//!
//! The token layout (version byte, timestamp, IV, HMAC) belongs to Fernet;
//! this module only recognises the prefix and delegates.

use fernet::Fernet;

use super::{CipherScheme, KeyMaterial};
use crate::enums::Scheme;
use crate::error::{EnvelopeError, Result};
use crate::resolver::KeyResolver;

pub fn encrypt_to_token(plaintext: &[u8], fernet: &Fernet) -> String {
    fernet.encrypt(plaintext)
}

/// No TTL: journal entries are decrypted regardless of token age
pub fn decrypt_token(token: &str, fernet: &Fernet) -> Result<Vec<u8>> {
    fernet
        .decrypt(token)
        .map_err(|_| EnvelopeError::Authentication(Scheme::Legacy))
}

/// Fallback scheme: `gAAAA` tokens
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyScheme;

impl CipherScheme for LegacyScheme {
    fn scheme(&self) -> Scheme {
        Scheme::Legacy
    }

    fn try_key<'k>(&self, keys: &'k KeyResolver) -> Option<KeyMaterial<'k>> {
        keys.legacy_key().map(KeyMaterial::Legacy)
    }

    fn encrypt(&self, plaintext: &[u8], key: KeyMaterial<'_>) -> Result<String> {
        let KeyMaterial::Legacy(fernet) = key else {
            return Err(EnvelopeError::KeyUnavailable(Scheme::Legacy));
        };
        Ok(encrypt_to_token(plaintext, fernet))
    }

    fn decrypt(&self, token: &str, key: KeyMaterial<'_>) -> Result<Vec<u8>> {
        let KeyMaterial::Legacy(fernet) = key else {
            return Err(EnvelopeError::KeyUnavailable(Scheme::Legacy));
        };
        decrypt_token(token, fernet)
    }
}
