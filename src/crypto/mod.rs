// src/crypto/mod.rs
//! Pure cryptographic operations: no I/O, no database
//!
//! Each scheme is a [`CipherScheme`] provider. The codec holds an ordered list
//! of them and tries them in priority order; the key material itself always
//! stays inside the [`KeyResolver`].

pub mod aead;
pub mod legacy;

use fernet::Fernet;

use crate::aliases::AeadKey32;
use crate::enums::Scheme;
use crate::error::Result;
use crate::resolver::KeyResolver;

pub use aead::AeadScheme;
pub use legacy::LegacyScheme;

/// Borrowed key material handed from the resolver to a scheme
#[derive(Clone, Copy)]
pub enum KeyMaterial<'k> {
    Aead(&'k AeadKey32),
    Legacy(&'k Fernet),
}

pub trait CipherScheme: Send + Sync {
    fn scheme(&self) -> Scheme;

    /// Key material for this scheme, if the resolver has any
    fn try_key<'k>(&self, keys: &'k KeyResolver) -> Option<KeyMaterial<'k>>;

    /// Seal `plaintext` into this scheme's complete wire token
    fn encrypt(&self, plaintext: &[u8], key: KeyMaterial<'_>) -> Result<String>;

    /// Open a complete wire token produced by this scheme
    fn decrypt(&self, token: &str, key: KeyMaterial<'_>) -> Result<Vec<u8>>;

    fn recognizes(&self, token: &str) -> bool {
        token.starts_with(self.scheme().prefix())
    }
}
