// ABOUTME: Column codecs transforming values at the storage boundary
// ABOUTME: Defines the ColumnCodec extension point and the datetime, encrypted and JSON codecs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

//! # Column Codecs
//!
//! The host mapping layer calls [`ColumnCodec::process_bind`] on every value
//! it is about to persist and [`ColumnCodec::process_result`] on every value
//! it fetches. Both calls are synchronous, side-effect free apart from
//! encryption nonces, and safe to repeat.

use crate::schema::{ColumnType, Dialect};
use brussels_core::{CodecResult, ColumnValue};

/// UTC-normalizing timestamp codec
pub mod datetime_utc;
/// Transparently encrypted text codec
pub mod encrypted_string;
/// Cross-dialect JSON codec
pub mod json;

pub use datetime_utc::{DateTimeUtc, IntoUtc};
pub use encrypted_string::EncryptedString;
pub use json::Json;

/// Serialization hook pair for one custom column type
pub trait ColumnCodec: Send + Sync {
    /// Name used in error messages
    fn name(&self) -> &'static str;

    /// Logical type of columns using this codec
    fn column_type(&self) -> ColumnType;

    /// Physical storage type on `dialect`
    fn storage_type(&self, dialect: Dialect) -> &'static str {
        self.column_type().physical_type(dialect)
    }

    /// Transform an application value before it is written
    ///
    /// # Errors
    ///
    /// Returns a [`brussels_core::CodecError`] if the value cannot be stored
    fn process_bind(&self, value: ColumnValue) -> CodecResult<ColumnValue>;

    /// Transform a stored value after it is read
    ///
    /// # Errors
    ///
    /// Returns a [`brussels_core::CodecError`] if the stored value cannot be interpreted
    fn process_result(&self, value: ColumnValue) -> CodecResult<ColumnValue>;
}
