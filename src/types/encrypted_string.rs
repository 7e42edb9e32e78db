// ABOUTME: Codec storing text columns as authenticated ciphertext tokens
// ABOUTME: Encrypts on bind and decrypts on result with a validated key ring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

//! # Encrypted String Codec
//!
//! Text values are sealed into printable tokens before they reach storage.
//! Encrypting the same text twice yields different tokens because every call
//! draws a fresh nonce. Every decryption problem (wrong key, corrupted or
//! foreign token, expired token) is reported as one `DecryptionFailure`.

use super::ColumnCodec;
use crate::crypto::{KeyMaterial, KeyRing, SecretKey, TokenCipher};
use crate::schema::ColumnType;
use brussels_core::constants::codec_names::ENCRYPTED_STRING;
use brussels_core::{CodecError, CodecResult, ColumnValue};
use chrono::{DateTime, Duration, Utc};

/// Transparently encrypted text codec
#[derive(Debug, Clone)]
pub struct EncryptedString {
    cipher: TokenCipher,
}

impl EncryptedString {
    /// Codec with a single key given as base64 text or bytes
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeyFormat` if the material is not base64 of 32 bytes
    pub fn new<'a>(key: impl Into<KeyMaterial<'a>>) -> CodecResult<Self> {
        Ok(Self::from_key_ring(SecretKey::parse(key)?))
    }

    /// Codec with a key handed over as a dynamic value
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the value is neither text nor bytes and
    /// `InvalidKeyFormat` if it does not hold a valid key
    pub fn from_key_value(key: &ColumnValue) -> CodecResult<Self> {
        Ok(Self::from_key_ring(SecretKey::from_value(key)?))
    }

    /// Codec over a prepared key ring
    #[must_use]
    pub fn from_key_ring(keys: impl Into<KeyRing>) -> Self {
        Self {
            cipher: TokenCipher::new(keys),
        }
    }

    /// Reject tokens older than `ttl` when decrypting
    #[must_use]
    pub fn with_ttl(self, ttl: Duration) -> Self {
        Self {
            cipher: self.cipher.with_ttl(ttl),
        }
    }

    /// Underlying token cipher
    #[must_use]
    pub const fn cipher(&self) -> &TokenCipher {
        &self.cipher
    }

    /// Encrypt text into a token
    ///
    /// # Errors
    ///
    /// Returns `EncryptionFailure` if the cipher rejects the input
    pub fn encrypt(&self, plaintext: &str) -> CodecResult<String> {
        self.cipher.seal(plaintext.as_bytes())
    }

    /// Encrypt text stamping the token with `issued_at`
    ///
    /// # Errors
    ///
    /// Returns `EncryptionFailure` if the cipher rejects the input
    pub fn encrypt_at(&self, plaintext: &str, issued_at: DateTime<Utc>) -> CodecResult<String> {
        self.cipher.seal_at(plaintext.as_bytes(), issued_at)
    }

    /// Decrypt a token back into text
    ///
    /// # Errors
    ///
    /// Returns `DecryptionFailure` if the token cannot be authenticated and
    /// `EncodingFailure` if the plaintext is not UTF-8
    pub fn decrypt(&self, token: &str) -> CodecResult<String> {
        into_text(self.cipher.open(token)?)
    }

    /// Decrypt a token evaluating the TTL against `now`
    ///
    /// # Errors
    ///
    /// Returns `DecryptionFailure` if the token cannot be authenticated or is
    /// outside the TTL window, and `EncodingFailure` if the plaintext is not UTF-8
    pub fn decrypt_at(&self, token: &str, now: DateTime<Utc>) -> CodecResult<String> {
        into_text(self.cipher.open_at(token, now)?)
    }

    /// Re-encrypt a token under the primary key
    ///
    /// # Errors
    ///
    /// Returns `DecryptionFailure` if no key in the ring authenticates the token
    pub fn rotate(&self, token: &str) -> CodecResult<String> {
        self.cipher.reseal(token)
    }

    /// Encrypt an optional value on the write path
    ///
    /// # Errors
    ///
    /// Returns `EncryptionFailure` if the cipher rejects the input
    pub fn encode(&self, value: Option<&str>) -> CodecResult<Option<String>> {
        value.map(|text| self.encrypt(text)).transpose()
    }

    /// Decrypt an optional value on the read path
    ///
    /// # Errors
    ///
    /// Returns `DecryptionFailure` or `EncodingFailure` as for [`Self::decrypt`]
    pub fn decode(&self, value: Option<&str>) -> CodecResult<Option<String>> {
        value.map(|token| self.decrypt(token)).transpose()
    }
}

fn into_text(plaintext: Vec<u8>) -> CodecResult<String> {
    String::from_utf8(plaintext).map_err(|_| CodecError::encoding_failure(ENCRYPTED_STRING))
}

impl ColumnCodec for EncryptedString {
    fn name(&self) -> &'static str {
        ENCRYPTED_STRING
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::EncryptedString
    }

    fn process_bind(&self, value: ColumnValue) -> CodecResult<ColumnValue> {
        match value {
            ColumnValue::Null => Ok(ColumnValue::Null),
            ColumnValue::Text(text) => self.encrypt(&text).map(ColumnValue::Text),
            other => Err(CodecError::type_mismatch(
                ENCRYPTED_STRING,
                "text",
                other.type_name(),
            )),
        }
    }

    fn process_result(&self, value: ColumnValue) -> CodecResult<ColumnValue> {
        match value {
            ColumnValue::Null => Ok(ColumnValue::Null),
            ColumnValue::Text(token) => self.decrypt(&token).map(ColumnValue::Text),
            other => Err(CodecError::type_mismatch(
                ENCRYPTED_STRING,
                "text",
                other.type_name(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_utf8_plaintext_is_encoding_failure() {
        let key = SecretKey::generate();
        let codec = EncryptedString::from_key_ring(key.clone());
        let token = TokenCipher::new(key).seal(&[0xff, 0xfe]).unwrap();

        assert_eq!(
            codec.decrypt(&token).unwrap_err(),
            CodecError::encoding_failure(ENCRYPTED_STRING)
        );
    }

    #[test]
    fn test_optional_helpers_pass_none_through() {
        let codec = EncryptedString::from_key_ring(SecretKey::generate());
        assert_eq!(codec.encode(None).unwrap(), None);
        assert_eq!(codec.decode(None).unwrap(), None);
    }
}
