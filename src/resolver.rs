// src/resolver.rs
//! Key resolution: configuration strings to cached key material
//!
//! Each scheme resolves at most once per [`KeyResolver`]. A scheme that fails
//! to resolve stays unavailable for the resolver's lifetime; build a new
//! resolver to pick up changed configuration.

use std::fmt;

use base64::Engine;
use fernet::Fernet;
use once_cell::sync::OnceCell;
use pbkdf2::pbkdf2_hmac;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::aliases::{
    self, AeadKey32, ExposeSecret, LegacyKeyB64, Passphrase, SaltBytes, SecretBox,
};
use crate::config::KeyConfig;
use crate::consts::{
    AEAD_KEY_LEN, CONFIG_B64, DEFAULT_FALLBACK_SALT, LEGACY_KEY_ENCODED_LEN, PBKDF2_ITERATIONS,
};
use crate::enums::Scheme;
use crate::error::{EnvelopeError, Result};

/// Owns the key material for both schemes; schemes only ever borrow it.
pub struct KeyResolver {
    config: KeyConfig,
    aead: OnceCell<Option<AeadKey32>>,
    legacy: OnceCell<Option<Fernet>>,
}

impl KeyResolver {
    pub fn new(config: KeyConfig) -> Self {
        Self {
            config,
            aead: OnceCell::new(),
            legacy: OnceCell::new(),
        }
    }

    /// AES-256-GCM key, derived on first call
    pub fn aead_key(&self) -> Option<&AeadKey32> {
        self.aead
            .get_or_init(|| cache_outcome(Scheme::Aead, resolve_aead_key(&self.config)))
            .as_ref()
    }

    /// Fernet instance for the legacy scheme, built on first call
    pub fn legacy_key(&self) -> Option<&Fernet> {
        self.legacy
            .get_or_init(|| cache_outcome(Scheme::Legacy, resolve_legacy_key(&self.config)))
            .as_ref()
    }

    pub fn is_available(&self, scheme: Scheme) -> bool {
        match scheme {
            Scheme::Aead => self.aead_key().is_some(),
            Scheme::Legacy => self.legacy_key().is_some(),
        }
    }

    pub fn has_any(&self) -> bool {
        self.is_available(Scheme::Aead) || self.is_available(Scheme::Legacy)
    }
}

impl fmt::Debug for KeyResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = |resolved: Option<bool>| match resolved {
            None => "unresolved",
            Some(true) => "[REDACTED]",
            Some(false) => "unavailable",
        };
        f.debug_struct("KeyResolver")
            .field("aead", &state(self.aead.get().map(Option::is_some)))
            .field("legacy", &state(self.legacy.get().map(Option::is_some)))
            .finish()
    }
}

fn cache_outcome<K>(scheme: Scheme, outcome: Result<K>) -> Option<K> {
    match outcome {
        Ok(key) => {
            debug!(%scheme, "key material resolved");
            Some(key)
        }
        Err(EnvelopeError::KeyUnavailable(_)) => {
            debug!(%scheme, "no key configured");
            None
        }
        Err(err) => {
            warn!(%scheme, error = %err, "key setup failed, scheme disabled");
            None
        }
    }
}

/// Resolve the AES-256-GCM key: a url-safe base64 32-byte key is used as-is,
/// anything else is a passphrase run through PBKDF2-HMAC-SHA256.
pub fn resolve_aead_key(config: &KeyConfig) -> Result<AeadKey32> {
    let value = config
        .aead_key()
        .ok_or(EnvelopeError::KeyUnavailable(Scheme::Aead))?;

    if let Ok(decoded) = CONFIG_B64.decode(value).map(Zeroizing::new) {
        if let Some(key) = aliases::aead_key_from_slice(&decoded) {
            return Ok(key);
        }
    }

    let passphrase = Passphrase::from(value.to_owned());
    let salt = resolve_salt(config);
    Ok(derive_aead_key(&passphrase, &salt))
}

/// Configured salt (base64 first, raw bytes otherwise), then the fallback
/// secret's bytes, then the built-in default.
pub fn resolve_salt(config: &KeyConfig) -> SaltBytes {
    if let Some(salt) = config.salt() {
        let bytes = CONFIG_B64
            .decode(salt)
            .unwrap_or_else(|_| salt.as_bytes().to_vec());
        return SaltBytes::from(bytes);
    }
    if let Some(secret) = config.fallback_secret() {
        return SaltBytes::from(secret.as_bytes().to_vec());
    }
    warn!("no salt or fallback secret configured, deriving with the built-in default salt");
    SaltBytes::from(DEFAULT_FALLBACK_SALT.as_bytes().to_vec())
}

pub fn derive_aead_key(passphrase: &Passphrase, salt: &SaltBytes) -> AeadKey32 {
    SecretBox::init_with_mut(|key: &mut [u8; AEAD_KEY_LEN]| {
        pbkdf2_hmac::<Sha256>(
            passphrase.expose_secret().as_bytes(),
            salt.expose_secret(),
            PBKDF2_ITERATIONS,
            key,
        )
    })
}

/// Resolve the Fernet key: short values are passphrases hashed with SHA-256,
/// longer ones must already be a Fernet key.
pub fn resolve_legacy_key(config: &KeyConfig) -> Result<Fernet> {
    let value = config
        .legacy_key()
        .ok_or(EnvelopeError::KeyUnavailable(Scheme::Legacy))?;

    let encoded = if value.chars().count() < LEGACY_KEY_ENCODED_LEN {
        let digest = Sha256::digest(value.as_bytes());
        LegacyKeyB64::from(CONFIG_B64.encode(digest))
    } else {
        LegacyKeyB64::from(value.to_owned())
    };

    Fernet::new(encoded.expose_secret())
        .ok_or_else(|| EnvelopeError::Derivation("legacy key is not a valid Fernet key".into()))
}
