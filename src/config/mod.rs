// ABOUTME: Configuration management module reading settings from environment variables
// ABOUTME: Covers the encryption key ring and the database URL that selects the dialect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors
//! Configuration module
//!
//! Everything is read from the environment:
//!
//! - **Encryption**: primary key, fallback keys and token TTL
//! - **Database**: `DATABASE_URL`, which also decides the schema dialect

/// Database URL parsing and dialect selection
pub mod database;
/// Encryption key ring configuration
pub mod encryption;

pub use database::DatabaseUrl;
pub use encryption::EncryptionConfig;
