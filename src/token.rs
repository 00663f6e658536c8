// src/token.rs
//! `enc1:` token encoding and the detection heuristic
//!
//! Wire format: `"enc1:" + base64url_nopad(nonce(12) || ciphertext || tag(16))`.

use base64::Engine;

use crate::consts::{AEAD_NONCE_LEN, AEAD_TOKEN_PREFIX, MIN_TOKEN_LEN, TOKEN_B64};
use crate::enums::TokenKind;
use crate::error::{EnvelopeError, Result};

/// Parsed form of an `enc1:` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AeadToken {
    nonce: [u8; AEAD_NONCE_LEN],
    sealed: Vec<u8>,
}

impl AeadToken {
    /// Split `nonce || sealed` as produced by [`crate::crypto::aead::seal`]
    pub fn from_blob(blob: &[u8]) -> Result<Self> {
        if blob.len() < AEAD_NONCE_LEN {
            return Err(EnvelopeError::MalformedToken(format!(
                "payload is {} bytes, shorter than the nonce",
                blob.len()
            )));
        }
        let (nonce, sealed) = blob.split_at(AEAD_NONCE_LEN);
        let mut fixed = [0u8; AEAD_NONCE_LEN];
        fixed.copy_from_slice(nonce);
        Ok(Self {
            nonce: fixed,
            sealed: sealed.to_vec(),
        })
    }

    /// Parse a full token; padded and unpadded payloads are both accepted
    pub fn decode(token: &str) -> Result<Self> {
        let payload = token
            .strip_prefix(AEAD_TOKEN_PREFIX)
            .ok_or_else(|| EnvelopeError::MalformedToken("missing enc1: prefix".into()))?;
        let blob = TOKEN_B64
            .decode(payload)
            .map_err(|e| EnvelopeError::MalformedToken(e.to_string()))?;
        Self::from_blob(&blob)
    }

    pub fn encode(&self) -> String {
        format!("{AEAD_TOKEN_PREFIX}{}", TOKEN_B64.encode(self.to_blob()))
    }

    pub fn nonce(&self) -> &[u8; AEAD_NONCE_LEN] {
        &self.nonce
    }

    /// Ciphertext followed by the GCM tag
    pub fn sealed(&self) -> &[u8] {
        &self.sealed
    }

    pub fn to_blob(&self) -> Vec<u8> {
        let mut blob = Vec::with_capacity(AEAD_NONCE_LEN + self.sealed.len());
        blob.extend_from_slice(&self.nonce);
        blob.extend_from_slice(&self.sealed);
        blob
    }
}

/// Advisory check: long enough and carrying a known scheme prefix.
///
/// Cannot tell a real token from plaintext that happens to start with
/// `enc1:` or `gAAAA`.
pub fn is_probably_encrypted(value: &str) -> bool {
    TokenKind::classify(value) != TokenKind::Plaintext && value.chars().count() >= MIN_TOKEN_LEN
}
