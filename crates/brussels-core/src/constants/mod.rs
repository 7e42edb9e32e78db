// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Key sizes, token layout, environment variable names and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.

/// Symmetric encryption parameters and token layout
pub mod crypto {
    /// Length of a decoded symmetric key in bytes (AES-256)
    pub const KEY_LEN: usize = 32;
    /// Length of the AES-GCM nonce in bytes
    pub const NONCE_LEN: usize = 12;
    /// Length of the AES-GCM authentication tag in bytes
    pub const TAG_LEN: usize = 16;
    /// Leading version byte of every token
    pub const TOKEN_VERSION: u8 = 0xB1;
    /// Version byte plus big-endian issue timestamp
    pub const HEADER_LEN: usize = 1 + 8;
    /// Smallest possible token (empty plaintext)
    pub const MIN_TOKEN_LEN: usize = HEADER_LEN + NONCE_LEN + TAG_LEN;
    /// Tokens issued further than this in the future are rejected
    pub const MAX_CLOCK_SKEW_SECS: i64 = 60;
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Primary encryption key (url-safe base64 of 32 bytes)
    pub const ENCRYPTION_KEY: &str = "BRUSSELS_ENCRYPTION_KEY";
    /// Comma-separated retired keys still accepted for decryption
    pub const ENCRYPTION_FALLBACK_KEYS: &str = "BRUSSELS_ENCRYPTION_FALLBACK_KEYS";
    /// Optional token time-to-live in seconds
    pub const TOKEN_TTL_SECS: &str = "BRUSSELS_TOKEN_TTL_SECS";
    /// Database URL, used to select the dialect
    pub const DATABASE_URL: &str = "DATABASE_URL";
}

/// Codec names as they appear in error messages
pub mod codec_names {
    /// UTC datetime codec
    pub const DATETIME_UTC: &str = "DateTimeUtc";
    /// Encrypted string codec
    pub const ENCRYPTED_STRING: &str = "EncryptedString";
    /// JSON codec
    pub const JSON: &str = "Json";
}

/// Service identifiers for structured logging
pub mod service_names {
    /// Library name used as the default tracing target
    pub const BRUSSELS: &str = "brussels";
}
