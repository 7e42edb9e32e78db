// ABOUTME: Symmetric key parsing, generation and the primary/fallback key ring
// ABOUTME: Keys are 32 bytes carried as url-safe base64 and zeroized on drop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

//! Symmetric key management for encrypted columns

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;
use brussels_core::constants::{codec_names, crypto::KEY_LEN};
use brussels_core::{CodecError, CodecResult, ColumnValue};
use rand::RngCore;
use std::fmt;
use zeroize::Zeroizing;

/// Key material as handed over by the caller, before validation
#[derive(Clone, Copy)]
pub enum KeyMaterial<'a> {
    /// Base64 text
    Text(&'a str),
    /// Raw bytes holding base64 text
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for KeyMaterial<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for KeyMaterial<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a [u8]> for KeyMaterial<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for KeyMaterial<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for KeyMaterial<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes)
    }
}

impl fmt::Debug for KeyMaterial<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(_) => f.write_str("KeyMaterial::Text(<redacted>)"),
            Self::Bytes(_) => f.write_str("KeyMaterial::Bytes(<redacted>)"),
        }
    }
}

/// Validated 256-bit symmetric key
#[derive(Clone)]
pub struct SecretKey {
    key: Zeroizing<[u8; KEY_LEN]>,
}

impl SecretKey {
    /// Parse key material into a key
    ///
    /// Accepts url-safe base64 (the canonical form produced by [`Self::to_base64`])
    /// and falls back to the standard alphabet.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeyFormat` if the material is not base64 text or does
    /// not decode to exactly 32 bytes
    pub fn parse<'a>(material: impl Into<KeyMaterial<'a>>) -> CodecResult<Self> {
        let text = match material.into() {
            KeyMaterial::Text(text) => text,
            KeyMaterial::Bytes(bytes) => std::str::from_utf8(bytes)
                .map_err(|_| CodecError::invalid_key_format(codec_names::ENCRYPTED_STRING))?,
        };

        let decoded = Zeroizing::new(
            URL_SAFE
                .decode(text)
                .or_else(|_| STANDARD.decode(text))
                .map_err(|_| CodecError::invalid_key_format(codec_names::ENCRYPTED_STRING))?,
        );

        let key: [u8; KEY_LEN] = decoded
            .as_slice()
            .try_into()
            .map_err(|_| CodecError::invalid_key_format(codec_names::ENCRYPTED_STRING))?;

        Ok(Self::from_bytes(key))
    }

    /// Parse a key handed over as a dynamic column value
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` for anything other than text or bytes, and
    /// `InvalidKeyFormat` if the material itself is malformed
    pub fn from_value(value: &ColumnValue) -> CodecResult<Self> {
        match value {
            ColumnValue::Text(text) => Self::parse(text),
            ColumnValue::Bytes(bytes) => Self::parse(bytes),
            other => Err(CodecError::TypeMismatch {
                received: other.type_name(),
                message: format!(
                    "{} key must be text or bytes, got {}.",
                    codec_names::ENCRYPTED_STRING,
                    other.type_name()
                ),
            }),
        }
    }

    /// Create a key from raw bytes - primarily for testing
    #[must_use]
    pub fn from_bytes(key: [u8; KEY_LEN]) -> Self {
        Self {
            key: Zeroizing::new(key),
        }
    }

    /// Generate a fresh random key
    #[must_use]
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_LEN];
        rand::thread_rng().fill_bytes(&mut key);
        let secret = Self::from_bytes(key);
        zeroize::Zeroize::zeroize(&mut key);
        secret
    }

    /// Url-safe base64 form, accepted by [`Self::parse`]
    #[must_use]
    pub fn to_base64(&self) -> String {
        URL_SAFE.encode(self.key.as_slice())
    }

    /// Raw key bytes for cipher construction
    #[must_use]
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.key.as_slice() == other.key.as_slice()
    }
}

impl Eq for SecretKey {}

/// Primary key plus retired keys still accepted for decryption
///
/// Encryption always uses the primary key. Decryption tries the primary key
/// first, then each fallback in the order they were added.
#[derive(Debug, Clone)]
pub struct KeyRing {
    primary: SecretKey,
    fallbacks: Vec<SecretKey>,
}

impl KeyRing {
    /// Ring with a single key
    #[must_use]
    pub const fn new(primary: SecretKey) -> Self {
        Self {
            primary,
            fallbacks: Vec::new(),
        }
    }

    /// Add a retired key accepted for decryption only
    #[must_use]
    pub fn with_fallback(mut self, key: SecretKey) -> Self {
        self.fallbacks.push(key);
        self
    }

    /// Key used for every encryption
    #[must_use]
    pub const fn primary(&self) -> &SecretKey {
        &self.primary
    }

    /// Number of fallback keys
    #[must_use]
    pub fn fallback_count(&self) -> usize {
        self.fallbacks.len()
    }

    /// All keys in decryption order
    pub fn decryption_keys(&self) -> impl Iterator<Item = &SecretKey> {
        std::iter::once(&self.primary).chain(self.fallbacks.iter())
    }
}

impl From<SecretKey> for KeyRing {
    fn from(primary: SecretKey) -> Self {
        Self::new(primary)
    }
}
