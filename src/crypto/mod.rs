// ABOUTME: Cryptography module providing symmetric keys and the encrypted token format
// ABOUTME: Centralizes all cryptographic operations used by encrypted columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

//! Cryptographic utilities for encrypted columns

/// Key parsing, generation and key rings
pub mod keys;
/// AES-256-GCM token sealing and opening
pub mod token;

pub use keys::{KeyMaterial, KeyRing, SecretKey};
pub use token::TokenCipher;
