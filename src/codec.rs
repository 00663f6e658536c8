// src/codec.rs
//! Envelope codec: the facade callers store and load content through
//!
//! Two layers:
//! - `try_encrypt` / `try_decrypt` return every failure as an [`EnvelopeError`].
//! - `encrypt_text` / `decrypt_text` never fail: on error they hand back their
//!   input unchanged, so undecodable content still round-trips as opaque text.
//!   A `decrypt_text` result equal to a prefixed input means decryption failed.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::KeyConfig;
use crate::crypto::{AeadScheme, CipherScheme, LegacyScheme};
use crate::enums::Scheme;
use crate::error::{EnvelopeError, Result};
use crate::resolver::KeyResolver;
use crate::token;

pub struct EnvelopeCodec {
    keys: Arc<KeyResolver>,
    schemes: Vec<Box<dyn CipherScheme>>,
}

impl EnvelopeCodec {
    pub fn new(config: KeyConfig) -> Self {
        Self::with_resolver(Arc::new(KeyResolver::new(config)))
    }

    /// AES-256-GCM first, Fernet as fallback
    pub fn with_resolver(keys: Arc<KeyResolver>) -> Self {
        let schemes: Vec<Box<dyn CipherScheme>> = vec![Box::new(AeadScheme), Box::new(LegacyScheme)];
        Self::with_schemes(keys, schemes)
    }

    /// Custom provider list, tried in the given order
    pub fn with_schemes(keys: Arc<KeyResolver>, schemes: Vec<Box<dyn CipherScheme>>) -> Self {
        Self { keys, schemes }
    }

    pub fn resolver(&self) -> &KeyResolver {
        &self.keys
    }

    /// Scheme new content would be sealed with
    pub fn active_scheme(&self) -> Option<Scheme> {
        self.schemes
            .iter()
            .find(|s| s.try_key(&self.keys).is_some())
            .map(|s| s.scheme())
    }

    pub fn has_encryption(&self) -> bool {
        self.active_scheme().is_some()
    }

    pub fn is_probably_encrypted(&self, value: &str) -> bool {
        token::is_probably_encrypted(value)
    }

    /// Seal with the first available scheme; a failing scheme falls through
    /// to the next one.
    pub fn try_encrypt(&self, plaintext: &str) -> Result<String> {
        if plaintext.is_empty() {
            return Ok(String::new());
        }

        let mut last_err = None;
        for scheme in &self.schemes {
            let Some(key) = scheme.try_key(&self.keys) else {
                continue;
            };
            match scheme.encrypt(plaintext.as_bytes(), key) {
                Ok(token) => return Ok(token),
                Err(err) => {
                    warn!(scheme = %scheme.scheme(), error = %err, "encryption failed, trying next scheme");
                    last_err = Some(err);
                }
            }
        }
        Err(last_err.unwrap_or(EnvelopeError::NoSchemeConfigured))
    }

    /// Decrypt a stored value. Unprefixed values predate encryption and come
    /// back unchanged.
    pub fn try_decrypt(&self, value: &str) -> Result<String> {
        if value.is_empty() {
            return Ok(String::new());
        }

        let Some(scheme) = self.schemes.iter().find(|s| s.recognizes(value)) else {
            return Ok(value.to_owned());
        };
        let key = scheme
            .try_key(&self.keys)
            .ok_or(EnvelopeError::KeyUnavailable(scheme.scheme()))?;
        let plaintext = scheme.decrypt(value, key)?;
        String::from_utf8(plaintext)
            .map_err(|_| EnvelopeError::MalformedToken("plaintext is not valid UTF-8".into()))
    }

    /// [`Self::try_encrypt`], storing plaintext when nothing is configured
    pub fn encrypt_text(&self, plaintext: &str) -> String {
        match self.try_encrypt(plaintext) {
            Ok(token) => token,
            Err(EnvelopeError::NoSchemeConfigured) => {
                debug!("no encryption scheme configured, storing plaintext");
                plaintext.to_owned()
            }
            Err(err) => {
                warn!(error = %err, "every configured scheme failed, storing plaintext");
                plaintext.to_owned()
            }
        }
    }

    /// [`Self::try_decrypt`], returning the value unchanged on any failure
    pub fn decrypt_text(&self, value: &str) -> String {
        match self.try_decrypt(value) {
            Ok(plaintext) => plaintext,
            Err(err) => {
                warn!(error = %err, "decryption failed, returning stored value");
                value.to_owned()
            }
        }
    }
}

impl std::fmt::Debug for EnvelopeCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let order: Vec<Scheme> = self.schemes.iter().map(|s| s.scheme()).collect();
        f.debug_struct("EnvelopeCodec")
            .field("keys", &self.keys)
            .field("schemes", &order)
            .finish()
    }
}
