// tests/crypto_tests.rs
mod support;

use journal_envelope::aliases::{aead_key_from_slice, ExposeSecret};
use journal_envelope::crypto::aead::{open, seal};
use journal_envelope::resolver::resolve_aead_key;
use journal_envelope::{AeadToken, EnvelopeError, Scheme};
use support::aead_config;

#[test]
fn seal_then_open_returns_plaintext() {
    let key = resolve_aead_key(&aead_config()).unwrap();
    let blob = seal(b"I am anxious today", &key).unwrap();

    // nonce(12) + ciphertext(18) + tag(16)
    assert_eq!(blob.len(), 12 + 18 + 16);
    assert_eq!(open(&blob, &key).unwrap(), b"I am anxious today");
}

#[test]
fn seal_uses_a_fresh_nonce_each_call() {
    let key = resolve_aead_key(&aead_config()).unwrap();
    let a = seal(b"same text", &key).unwrap();
    let b = seal(b"same text", &key).unwrap();
    assert_ne!(a[..12], b[..12]);
    assert_ne!(a, b);
}

#[test]
fn open_with_wrong_key_fails_authentication() {
    let key = resolve_aead_key(&aead_config()).unwrap();
    let other = aead_key_from_slice(&[7u8; 32]).unwrap();
    let blob = seal(b"private", &key).unwrap();

    assert!(matches!(
        open(&blob, &other),
        Err(EnvelopeError::Authentication(Scheme::Aead))
    ));
}

#[test]
fn open_rejects_flipped_bits() {
    let key = resolve_aead_key(&aead_config()).unwrap();
    let mut blob = seal(b"private", &key).unwrap();
    let last = blob.len() - 1;
    blob[last] ^= 0x01;
    assert!(matches!(
        open(&blob, &key),
        Err(EnvelopeError::Authentication(Scheme::Aead))
    ));
}

#[test]
fn open_rejects_blob_shorter_than_nonce() {
    let key = resolve_aead_key(&aead_config()).unwrap();
    assert!(matches!(
        open(&[0u8; 11], &key),
        Err(EnvelopeError::MalformedToken(_))
    ));
    // nonce only, no tag
    assert!(matches!(
        open(&[0u8; 12], &key),
        Err(EnvelopeError::Authentication(Scheme::Aead))
    ));
}

#[test]
fn sealed_blob_matches_token_payload() {
    let key = resolve_aead_key(&aead_config()).unwrap();
    let blob = seal(b"grateful", &key).unwrap();
    let token = AeadToken::from_blob(&blob).unwrap().encode();

    let parsed = AeadToken::decode(&token).unwrap();
    assert_eq!(open(&parsed.to_blob(), &key).unwrap(), b"grateful");
}

#[test]
fn key_from_slice_requires_exactly_32_bytes() {
    assert!(aead_key_from_slice(&[0u8; 31]).is_none());
    assert!(aead_key_from_slice(&[0u8; 33]).is_none());
    let key = aead_key_from_slice(&[0x42u8; 32]).unwrap();
    assert_eq!(key.expose_secret(), &[0x42; 32]);
}
