// ABOUTME: Main library entry point for the brussels persistence building blocks
// ABOUTME: Column codecs, ordered-position maintenance and explicitly composed schema fragments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

#![deny(unsafe_code)]

//! # Brussels
//!
//! Reusable building blocks that plug into a host persistence layer. Nothing
//! here owns a connection, a transaction or a schema migration; the host calls
//! in at fixed extension points.
//!
//! ## Features
//!
//! - **Column codecs**: UTC-normalized timestamps, transparently encrypted
//!   text and cross-dialect JSON behind one [`types::ColumnCodec`] trait
//! - **Ordered positions**: [`ordering::OrderingList`] keeps member positions
//!   dense and zero-based across push, insert, remove and pop
//! - **Schema fragments**: primary key, timestamp and position mixins merged
//!   in declaration order, with a per-dialect capability table and pre-insert hooks
//! - **`SQLite` host**: `sqlx` helpers to persist codec output (feature `sqlite`)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use brussels::types::{ColumnCodec, EncryptedString};
//! use brussels_core::{AppResult, ColumnValue};
//!
//! fn main() -> AppResult<()> {
//!     let codec = EncryptedString::new("MDEyMzQ1Njc4OWFiY2RlZjAxMjM0NTY3ODlhYmNkZWY=")?;
//!     let stored = codec.process_bind(ColumnValue::from("s3cret"))?;
//!     let restored = codec.process_result(stored)?;
//!     assert_eq!(restored, ColumnValue::from("s3cret"));
//!     Ok(())
//! }
//! ```

/// Environment configuration for keys and the database URL
pub mod config;

/// Symmetric keys, key rings and the encrypted token format
pub mod crypto;

/// Structured logging setup
pub mod logging;

/// Ordered-position maintenance
pub mod ordering;

/// Schema fragments, dialects and pre-insert hooks
pub mod schema;

/// Column codecs
pub mod types;

/// Database host adapters
#[cfg(feature = "sqlite")]
pub mod host;

pub use brussels_core::{
    AppError, AppResult, CodecError, CodecResult, ColumnValue, ErrorCode,
};
