// ABOUTME: Token commands for brussels-cli
// ABOUTME: Encrypts, decrypts, rotates and inspects stored encrypted-column values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use brussels::types::EncryptedString;
use brussels_core::AppResult;
use tracing::debug;

type Result<T> = AppResult<T>;

/// Encrypt a plaintext value
pub fn encrypt(codec: &EncryptedString, value: &str) -> Result<()> {
    let token = codec.encrypt(value)?;
    println!("{token}");
    Ok(())
}

/// Decrypt a stored token
pub fn decrypt(codec: &EncryptedString, token: &str) -> Result<()> {
    let plaintext = codec.decrypt(token.trim())?;
    println!("{plaintext}");
    Ok(())
}

/// Re-encrypt a token under the primary key
pub fn rotate(codec: &EncryptedString, token: &str) -> Result<()> {
    let rotated = codec.rotate(token.trim())?;
    debug!("Token re-encrypted under the primary key");
    println!("{rotated}");
    Ok(())
}

/// Show when a token was issued
pub fn inspect(codec: &EncryptedString, token: &str) -> Result<()> {
    let cipher = codec.cipher();
    let issued_at = cipher.issued_at(token.trim())?;
    println!("issued_at: {}", issued_at.to_rfc3339());
    if cipher.ttl().is_some() {
        match cipher.expires_at(token.trim())? {
            Some(expires_at) => println!("expires_at: {}", expires_at.to_rfc3339()),
            None => println!("expires_at: never"),
        }
    }
    Ok(())
}
