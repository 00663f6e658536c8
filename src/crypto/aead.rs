// src/crypto/aead.rs
//! AES-256-GCM with a fresh random 96-bit nonce per message

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::RngCore;

use super::{CipherScheme, KeyMaterial};
use crate::aliases::{AeadKey32, ExposeSecret};
use crate::consts::AEAD_NONCE_LEN;
use crate::enums::Scheme;
use crate::error::{EnvelopeError, Result};
use crate::resolver::KeyResolver;
use crate::token::AeadToken;

/// Seal with no associated data producing `nonce || ciphertext || tag`
pub fn seal(plaintext: &[u8], key: &AeadKey32) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.expose_secret()));

    let mut nonce = [0u8; AEAD_NONCE_LEN];
    rand::rng().fill_bytes(&mut nonce);

    let sealed = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| EnvelopeError::Encryption(Scheme::Aead))?;

    let mut out = Vec::with_capacity(AEAD_NONCE_LEN + sealed.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&sealed);
    Ok(out)
}

/// Open `nonce || ciphertext || tag`; fails on a wrong key or any tampering
pub fn open(blob: &[u8], key: &AeadKey32) -> Result<Vec<u8>> {
    let token = AeadToken::from_blob(blob)?;
    open_token(&token, key)
}

fn open_token(token: &AeadToken, key: &AeadKey32) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.expose_secret()));
    cipher
        .decrypt(Nonce::from_slice(token.nonce()), token.sealed())
        .map_err(|_| EnvelopeError::Authentication(Scheme::Aead))
}

/// Primary scheme: `enc1:` tokens
#[derive(Debug, Default, Clone, Copy)]
pub struct AeadScheme;

impl CipherScheme for AeadScheme {
    fn scheme(&self) -> Scheme {
        Scheme::Aead
    }

    fn try_key<'k>(&self, keys: &'k KeyResolver) -> Option<KeyMaterial<'k>> {
        keys.aead_key().map(KeyMaterial::Aead)
    }

    fn encrypt(&self, plaintext: &[u8], key: KeyMaterial<'_>) -> Result<String> {
        let KeyMaterial::Aead(key) = key else {
            return Err(EnvelopeError::KeyUnavailable(Scheme::Aead));
        };
        let blob = seal(plaintext, key)?;
        Ok(AeadToken::from_blob(&blob)?.encode())
    }

    fn decrypt(&self, token: &str, key: KeyMaterial<'_>) -> Result<Vec<u8>> {
        let KeyMaterial::Aead(key) = key else {
            return Err(EnvelopeError::KeyUnavailable(Scheme::Aead));
        };
        open_token(&AeadToken::decode(token)?, key)
    }
}
