// ABOUTME: Unified error types shared by codecs, schema fragments and host adapters
// ABOUTME: Defines ErrorCode, AppError and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

//! # Unified Error Handling System
//!
//! Codec failures are reported as [`CodecError`], a closed set of kinds the
//! host mapping layer can match on. Everything around the codecs (configuration,
//! schema composition, the `SQLite` host adapter) reports [`AppError`], which
//! carries an [`ErrorCode`], a message and an optional source error.

/// Codec-level error kinds
pub mod codec;

pub use codec::{CodecError, CodecResult};

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    // Codec failures (1000-1999)
    /// Value passed to a codec has the wrong type
    #[serde(rename = "TYPE_MISMATCH")]
    TypeMismatch = 1000,
    /// Key material is not a valid symmetric key
    #[serde(rename = "INVALID_KEY_FORMAT")]
    InvalidKeyFormat = 1001,
    /// Ciphertext could not be authenticated or decrypted
    #[serde(rename = "DECRYPTION_FAILURE")]
    DecryptionFailure = 1002,
    /// Decrypted bytes are not valid UTF-8
    #[serde(rename = "ENCODING_FAILURE")]
    EncodingFailure = 1003,
    /// The cipher refused to encrypt the plaintext
    #[serde(rename = "ENCRYPTION_FAILURE")]
    EncryptionFailure = 1004,
    /// Storage returned a value the codec cannot interpret
    #[serde(rename = "INVALID_STORED_VALUE")]
    InvalidStoredValue = 1005,

    // Validation (3000-3999)
    /// Generic invalid input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Two schema fragments declare the same column
    #[serde(rename = "SCHEMA_CONFLICT")]
    SchemaConflict = 3001,

    // Configuration (6000-6999)
    /// Required configuration is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// Configuration is present but invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Database operation failed
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "The value has the wrong type for this column",
            Self::InvalidKeyFormat => "The encryption key is malformed",
            Self::DecryptionFailure => "The stored value could not be decrypted",
            Self::EncodingFailure => "The decrypted value is not valid text",
            Self::EncryptionFailure => "The value could not be encrypted",
            Self::InvalidStoredValue => "The stored value could not be interpreted",
            Self::InvalidInput => "The provided input is invalid",
            Self::SchemaConflict => "The table schema has conflicting column declarations",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::DatabaseError => "Database operation failed",
        }
    }

    /// Whether the code belongs to the codec range
    #[must_use]
    pub const fn is_codec_error(&self) -> bool {
        (*self as u16) < 2000
    }
}

/// Unified error type for everything outside the codecs
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Conflicting schema declarations
    #[must_use]
    pub fn schema_conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SchemaConflict, message)
    }

    /// Missing configuration value
    #[must_use]
    pub fn config_missing(variable: &str) -> Self {
        Self::new(
            ErrorCode::ConfigMissing,
            format!("{variable} environment variable is not set"),
        )
    }

    /// Invalid configuration value
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Database error
    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<CodecError> for AppError {
    fn from(error: CodecError) -> Self {
        let code = error.code();
        let message = error.to_string();
        Self::new(code, message).with_source(error)
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        Self::database(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
