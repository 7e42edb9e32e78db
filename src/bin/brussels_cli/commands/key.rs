// ABOUTME: Key management commands for brussels-cli
// ABOUTME: Generates fresh url-safe base64 encryption keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use brussels::crypto::SecretKey;
use brussels_core::constants::env_config;
use tracing::info;

/// Print `count` freshly generated keys, one per line
pub fn generate(count: usize) {
    info!(count, "Generating encryption keys");
    for _ in 0..count {
        println!("{}", SecretKey::generate().to_base64());
    }
    info!(
        "Set {} to the new key and move the old one to {}",
        env_config::ENCRYPTION_KEY,
        env_config::ENCRYPTION_FALLBACK_KEYS
    );
}
