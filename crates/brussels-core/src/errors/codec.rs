// ABOUTME: Error kinds raised by column codecs on the bind and result paths
// ABOUTME: Keeps decryption failures generic so callers cannot tell wrong keys from corrupt tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

//! # Codec Error Types
//!
//! Every failure of a codec call is local to the single value being processed
//! and is returned to the host mapping layer, which decides whether to abort
//! the enclosing transaction. Codecs never retry and never log.

use super::ErrorCode;
use thiserror::Error;

/// Errors raised by column codecs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CodecError {
    /// The value handed to the codec has the wrong type
    #[error("{message}")]
    TypeMismatch {
        /// `type_name()` of the offending value
        received: &'static str,
        /// Full message, naming the received type and any remediation
        message: String,
    },
    /// Key material does not decode into a valid symmetric key
    #[error("{codec} key must be a valid 32-byte url-safe base64 key.")]
    InvalidKeyFormat {
        /// Codec that rejected the key
        codec: &'static str,
    },
    /// Authentication or format failure while decrypting
    #[error("{codec} failed to decrypt value. Ciphertext may be invalid or key may be wrong.")]
    DecryptionFailure {
        /// Codec that failed
        codec: &'static str,
    },
    /// Decryption succeeded but the plaintext is not UTF-8
    #[error("{codec} decrypted value is not valid UTF-8 text.")]
    EncodingFailure {
        /// Codec that failed
        codec: &'static str,
    },
    /// The cipher refused the plaintext
    #[error("{codec} failed to encrypt value.")]
    EncryptionFailure {
        /// Codec that failed
        codec: &'static str,
    },
    /// Storage handed back something the codec cannot interpret
    #[error("{codec} cannot interpret stored value: {reason}")]
    InvalidStoredValue {
        /// Codec that failed
        codec: &'static str,
        /// What was wrong with the stored value
        reason: String,
    },
}

impl CodecError {
    /// Type mismatch without a remediation hint
    #[must_use]
    pub fn type_mismatch(codec: &str, expected: &str, received: &'static str) -> Self {
        Self::TypeMismatch {
            received,
            message: format!("{codec} requires {expected} value, got {received}."),
        }
    }

    /// Type mismatch with a remediation hint appended to the message
    #[must_use]
    pub fn type_mismatch_with_hint(
        codec: &str,
        expected: &str,
        received: &'static str,
        hint: &str,
    ) -> Self {
        Self::TypeMismatch {
            received,
            message: format!("{codec} requires {expected} value, got {received}. {hint}"),
        }
    }

    /// Malformed key material
    #[must_use]
    pub const fn invalid_key_format(codec: &'static str) -> Self {
        Self::InvalidKeyFormat { codec }
    }

    /// Generic decryption failure
    #[must_use]
    pub const fn decryption_failure(codec: &'static str) -> Self {
        Self::DecryptionFailure { codec }
    }

    /// Decrypted bytes are not UTF-8
    #[must_use]
    pub const fn encoding_failure(codec: &'static str) -> Self {
        Self::EncodingFailure { codec }
    }

    /// Encryption refused by the cipher
    #[must_use]
    pub const fn encryption_failure(codec: &'static str) -> Self {
        Self::EncryptionFailure { codec }
    }

    /// Uninterpretable stored value
    #[must_use]
    pub fn invalid_stored_value(codec: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidStoredValue {
            codec,
            reason: reason.into(),
        }
    }

    /// Error code for this kind
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::TypeMismatch { .. } => ErrorCode::TypeMismatch,
            Self::InvalidKeyFormat { .. } => ErrorCode::InvalidKeyFormat,
            Self::DecryptionFailure { .. } => ErrorCode::DecryptionFailure,
            Self::EncodingFailure { .. } => ErrorCode::EncodingFailure,
            Self::EncryptionFailure { .. } => ErrorCode::EncryptionFailure,
            Self::InvalidStoredValue { .. } => ErrorCode::InvalidStoredValue,
        }
    }
}

/// Result alias for codec calls
pub type CodecResult<T> = Result<T, CodecError>;
