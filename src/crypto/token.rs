// ABOUTME: Authenticated token format used to store encrypted column values
// ABOUTME: AES-256-GCM with a random nonce per call and the version/timestamp header bound as AAD
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

//! # Token Cipher
//!
//! Token layout before base64 encoding:
//!
//! ```text
//! version (1) | issued_at, big-endian unix seconds (8) | nonce (12) | ciphertext + tag
//! ```
//!
//! The 9-byte header is authenticated as associated data, so a token whose
//! version or timestamp has been altered fails to decrypt. Every failure on the
//! decryption path collapses into one `DecryptionFailure` so callers cannot
//! distinguish a wrong key from a corrupted token.

use super::keys::{KeyRing, SecretKey};
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, Payload};
use aes_gcm::{Aes256Gcm, KeyInit};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use brussels_core::constants::codec_names;
use brussels_core::constants::crypto::{
    HEADER_LEN, MAX_CLOCK_SKEW_SECS, MIN_TOKEN_LEN, NONCE_LEN, TOKEN_VERSION,
};
use brussels_core::{CodecError, CodecResult};
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;

const CODEC: &str = codec_names::ENCRYPTED_STRING;

/// Encrypts and decrypts tokens with a key ring
#[derive(Debug, Clone)]
pub struct TokenCipher {
    keys: KeyRing,
    ttl: Option<Duration>,
}

/// Authenticated contents of a token
struct Opened {
    issued_at: i64,
    plaintext: Vec<u8>,
}

impl TokenCipher {
    /// Cipher without a time-to-live
    #[must_use]
    pub fn new(keys: impl Into<KeyRing>) -> Self {
        Self {
            keys: keys.into(),
            ttl: None,
        }
    }

    /// Reject tokens older than `ttl` on decryption
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Configured time-to-live, if any
    #[must_use]
    pub const fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Key ring in use
    #[must_use]
    pub const fn keys(&self) -> &KeyRing {
        &self.keys
    }

    /// Encrypt bytes into a printable token stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns `EncryptionFailure` if the cipher rejects the plaintext
    pub fn seal(&self, plaintext: &[u8]) -> CodecResult<String> {
        self.seal_at(plaintext, Utc::now())
    }

    /// Encrypt bytes into a printable token stamped with `issued_at`
    ///
    /// # Errors
    ///
    /// Returns `EncryptionFailure` if the cipher rejects the plaintext or
    /// `issued_at` predates the unix epoch
    pub fn seal_at(&self, plaintext: &[u8], issued_at: DateTime<Utc>) -> CodecResult<String> {
        let timestamp = u64::try_from(issued_at.timestamp())
            .map_err(|_| CodecError::encryption_failure(CODEC))?;
        seal_with_key(self.keys.primary(), plaintext, timestamp)
    }

    /// Decrypt a token using the current time for TTL checks
    ///
    /// # Errors
    ///
    /// Returns `DecryptionFailure` if no key in the ring authenticates the
    /// token, the token is malformed, or it is outside the TTL window
    pub fn open(&self, token: &str) -> CodecResult<Vec<u8>> {
        self.open_at(token, Utc::now())
    }

    /// Decrypt a token evaluating the TTL against `now`
    ///
    /// # Errors
    ///
    /// Returns `DecryptionFailure` if no key in the ring authenticates the
    /// token, the token is malformed, or it is outside the TTL window
    pub fn open_at(&self, token: &str, now: DateTime<Utc>) -> CodecResult<Vec<u8>> {
        let opened = self.authenticate(token)?;

        if let Some(ttl) = self.ttl {
            let now = now.timestamp();
            let expired = opened.issued_at.saturating_add(ttl.num_seconds()) < now;
            let from_future = opened.issued_at > now.saturating_add(MAX_CLOCK_SKEW_SECS);
            if expired || from_future {
                return Err(CodecError::decryption_failure(CODEC));
            }
        }

        Ok(opened.plaintext)
    }

    /// Re-encrypt a token under the primary key, keeping its issue time
    ///
    /// The TTL is not applied, so expired tokens can still be migrated.
    ///
    /// # Errors
    ///
    /// Returns `DecryptionFailure` if no key in the ring authenticates the token
    pub fn reseal(&self, token: &str) -> CodecResult<String> {
        let opened = self.authenticate(token)?;
        let timestamp =
            u64::try_from(opened.issued_at).map_err(|_| CodecError::decryption_failure(CODEC))?;
        seal_with_key(self.keys.primary(), &opened.plaintext, timestamp)
    }

    /// Issue time recorded in a token, after authenticating it
    ///
    /// # Errors
    ///
    /// Returns `DecryptionFailure` if no key in the ring authenticates the token
    pub fn issued_at(&self, token: &str) -> CodecResult<DateTime<Utc>> {
        let opened = self.authenticate(token)?;
        DateTime::from_timestamp(opened.issued_at, 0)
            .ok_or_else(|| CodecError::decryption_failure(CODEC))
    }

    /// Instant after which the TTL rejects a token
    ///
    /// `None` when no TTL is configured or the expiry lies beyond the
    /// representable range.
    ///
    /// # Errors
    ///
    /// Returns `DecryptionFailure` if no key in the ring authenticates the token
    pub fn expires_at(&self, token: &str) -> CodecResult<Option<DateTime<Utc>>> {
        let issued_at = self.issued_at(token)?;
        Ok(self.ttl.and_then(|ttl| issued_at.checked_add_signed(ttl)))
    }

    fn authenticate(&self, token: &str) -> CodecResult<Opened> {
        let data = URL_SAFE
            .decode(token)
            .map_err(|_| CodecError::decryption_failure(CODEC))?;

        if data.len() < MIN_TOKEN_LEN || data.first() != Some(&TOKEN_VERSION) {
            return Err(CodecError::decryption_failure(CODEC));
        }

        let (header, body) = data.split_at(HEADER_LEN);
        let (nonce, ciphertext) = body.split_at(NONCE_LEN);

        let mut timestamp = [0u8; 8];
        timestamp.copy_from_slice(&header[1..]);
        let issued_at = i64::try_from(u64::from_be_bytes(timestamp))
            .map_err(|_| CodecError::decryption_failure(CODEC))?;

        self.keys
            .decryption_keys()
            .find_map(|key| open_with_key(key, header, nonce, ciphertext))
            .map(|plaintext| Opened {
                issued_at,
                plaintext,
            })
            .ok_or_else(|| CodecError::decryption_failure(CODEC))
    }
}

fn seal_with_key(key: &SecretKey, plaintext: &[u8], timestamp: u64) -> CodecResult<String> {
    let cipher = Aes256Gcm::new(GenericArray::from_slice(key.as_bytes()));

    let mut header = [0u8; HEADER_LEN];
    header[0] = TOKEN_VERSION;
    header[1..].copy_from_slice(&timestamp.to_be_bytes());

    // Generate random nonce
    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);
    let nonce = GenericArray::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(
            nonce,
            Payload {
                msg: plaintext,
                aad: &header,
            },
        )
        .map_err(|_| CodecError::encryption_failure(CODEC))?;

    let mut token = Vec::with_capacity(HEADER_LEN + NONCE_LEN + ciphertext.len());
    token.extend_from_slice(&header);
    token.extend_from_slice(&nonce_bytes);
    token.extend_from_slice(&ciphertext);

    Ok(URL_SAFE.encode(token))
}

fn open_with_key(
    key: &SecretKey,
    header: &[u8],
    nonce: &[u8],
    ciphertext: &[u8],
) -> Option<Vec<u8>> {
    let cipher = Aes256Gcm::new(GenericArray::from_slice(key.as_bytes()));
    cipher
        .decrypt(
            GenericArray::from_slice(nonce),
            Payload {
                msg: ciphertext,
                aad: header,
            },
        )
        .ok()
}
