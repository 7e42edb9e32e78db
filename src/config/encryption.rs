// ABOUTME: Encryption key ring and token TTL loaded from the environment
// ABOUTME: Builds the encrypted string codec used by hosts and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use crate::crypto::{KeyRing, SecretKey};
use crate::types::EncryptedString;
use brussels_core::constants::env_config;
use brussels_core::{AppError, AppResult};
use chrono::Duration;
use std::env;
use tracing::{info, warn};

/// Key ring and optional TTL for encrypted columns
#[derive(Debug, Clone)]
pub struct EncryptionConfig {
    /// Primary key plus retired keys
    pub keys: KeyRing,
    /// Maximum token age accepted on decryption
    pub ttl: Option<Duration>,
}

impl EncryptionConfig {
    /// Load from `BRUSSELS_ENCRYPTION_KEY`, `BRUSSELS_ENCRYPTION_FALLBACK_KEYS`
    /// and `BRUSSELS_TOKEN_TTL_SECS`
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if the primary key is not set and
    /// `ConfigInvalid` if any value cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        Self::from_env_with_overrides(None, &[], None)
    }

    /// Load from the environment, with each provided value replacing its
    /// environment counterpart
    ///
    /// A non-empty `fallbacks` list replaces `BRUSSELS_ENCRYPTION_FALLBACK_KEYS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if no primary key is given or set and
    /// `ConfigInvalid` if any value cannot be parsed
    pub fn from_env_with_overrides(
        primary: Option<&str>,
        fallbacks: &[String],
        ttl: Option<&str>,
    ) -> AppResult<Self> {
        let primary = match primary {
            Some(key) => key.to_owned(),
            None => env::var(env_config::ENCRYPTION_KEY)
                .map_err(|_| AppError::config_missing(env_config::ENCRYPTION_KEY))?,
        };
        let fallbacks = if fallbacks.is_empty() {
            env::var(env_config::ENCRYPTION_FALLBACK_KEYS).ok()
        } else {
            Some(fallbacks.join(","))
        };
        let ttl = ttl
            .map(str::to_owned)
            .or_else(|| env::var(env_config::TOKEN_TTL_SECS).ok());

        Self::from_parts(&primary, fallbacks.as_deref(), ttl.as_deref())
    }

    /// Build from raw configuration values
    ///
    /// `fallbacks` is a comma-separated key list; empty entries are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a key or the TTL cannot be parsed
    pub fn from_parts(
        primary: &str,
        fallbacks: Option<&str>,
        ttl: Option<&str>,
    ) -> AppResult<Self> {
        let primary = SecretKey::parse(primary.trim()).map_err(|e| {
            AppError::config_invalid(format!("{} is not a valid key", env_config::ENCRYPTION_KEY))
                .with_source(e)
        })?;

        let mut keys = KeyRing::new(primary);
        for (index, fallback) in fallbacks
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .enumerate()
        {
            let key = SecretKey::parse(fallback).map_err(|e| {
                AppError::config_invalid(format!(
                    "Entry {index} of {} is not a valid key",
                    env_config::ENCRYPTION_FALLBACK_KEYS
                ))
                .with_source(e)
            })?;
            if &key == keys.primary() {
                warn!(entry = index, "Fallback key duplicates the primary key");
            }
            keys = keys.with_fallback(key);
        }

        let ttl = ttl.map(parse_ttl).transpose()?;

        info!(
            fallback_keys = keys.fallback_count(),
            ttl_secs = ?ttl.map(|ttl| ttl.num_seconds()),
            "Loaded encryption configuration"
        );

        Ok(Self { keys, ttl })
    }

    /// Encrypted string codec over this configuration
    #[must_use]
    pub fn build_codec(&self) -> EncryptedString {
        let codec = EncryptedString::from_key_ring(self.keys.clone());
        match self.ttl {
            Some(ttl) => codec.with_ttl(ttl),
            None => codec,
        }
    }
}

fn parse_ttl(value: &str) -> AppResult<Duration> {
    let invalid = || {
        AppError::config_invalid(format!(
            "{} must be a positive number of seconds, got '{value}'",
            env_config::TOKEN_TTL_SECS
        ))
    };
    let secs: i64 = value.trim().parse().map_err(|_| invalid())?;
    if secs <= 0 {
        return Err(invalid());
    }
    Duration::try_seconds(secs).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brussels_core::ErrorCode;

    const MODEL_KEY: &str = "MDEyMzQ1Njc4OWFiY2RlZjAxMjM0NTY3ODlhYmNkZWY=";

    #[test]
    fn test_fallback_list_skips_blanks() {
        let fallback = SecretKey::generate().to_base64();
        let list = format!(" {fallback} ,, ");
        let config = EncryptionConfig::from_parts(MODEL_KEY, Some(&list), None).unwrap();

        assert_eq!(config.keys.fallback_count(), 1);
        assert!(config.ttl.is_none());
    }

    #[test]
    fn test_invalid_ttl_rejected() {
        for ttl in ["0", "-5", "soon"] {
            let error = EncryptionConfig::from_parts(MODEL_KEY, None, Some(ttl)).unwrap_err();
            assert_eq!(error.code, ErrorCode::ConfigInvalid);
        }
    }

    #[test]
    fn test_invalid_primary_key_keeps_source() {
        let error = EncryptionConfig::from_parts("not-a-key", None, None).unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(error.source.is_some());
    }
}
