// ABOUTME: Brussels CLI - command-line tool for encrypted column key management
// ABOUTME: Generates keys and encrypts, decrypts, rotates or inspects stored tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors
//!
//! Usage:
//! ```bash
//! # Generate a new key
//! brussels-cli key generate
//!
//! # Encrypt a value with the key from BRUSSELS_ENCRYPTION_KEY
//! brussels-cli encrypt "s3cret"
//!
//! # Decrypt with an explicit key
//! brussels-cli --key <base64-key> decrypt <token>
//!
//! # Move a token from a retired key onto the new primary key
//! brussels-cli --key <new-key> --fallback-key <old-key> rotate <token>
//! ```

mod commands;

use brussels::config::EncryptionConfig;
use brussels::logging::LoggingConfig;
use brussels::types::EncryptedString;
use brussels_core::AppResult;
use clap::{Parser, Subcommand};
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "brussels-cli",
    about = "Brussels encrypted column management CLI",
    long_about = "Generate encryption keys and encrypt, decrypt, rotate or inspect values \
                  stored by the EncryptedString column codec."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Primary key override (url-safe base64), defaults to BRUSSELS_ENCRYPTION_KEY
    #[arg(long, global = true)]
    key: Option<String>,

    /// Retired key still accepted for decryption (repeatable), replaces
    /// BRUSSELS_ENCRYPTION_FALLBACK_KEYS
    #[arg(long = "fallback-key", global = true)]
    fallback_keys: Vec<String>,

    /// Reject tokens older than this many seconds, defaults to BRUSSELS_TOKEN_TTL_SECS
    #[arg(long, global = true)]
    ttl_secs: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Key management commands
    Key {
        #[command(subcommand)]
        action: KeyCommand,
    },

    /// Encrypt a plaintext value
    Encrypt {
        /// Value to encrypt
        value: String,
    },

    /// Decrypt a stored token
    Decrypt {
        /// Token to decrypt
        token: String,
    },

    /// Re-encrypt a token under the primary key
    Rotate {
        /// Token to rotate
        token: String,
    },

    /// Show a token's issue time
    Inspect {
        /// Token to inspect
        token: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum KeyCommand {
    /// Generate new random keys
    Generate {
        /// Number of keys to generate
        #[arg(long, default_value = "1")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    info!("Brussels CLI");

    match &cli.command {
        Command::Key { action } => match action {
            KeyCommand::Generate { count } => commands::key::generate(*count),
        },
        Command::Encrypt { value } => commands::token::encrypt(&load_codec(&cli)?, value)?,
        Command::Decrypt { token } => commands::token::decrypt(&load_codec(&cli)?, token)?,
        Command::Rotate { token } => commands::token::rotate(&load_codec(&cli)?, token)?,
        Command::Inspect { token } => commands::token::inspect(&load_codec(&cli)?, token)?,
    }

    Ok(())
}

/// Codec from the environment configuration, with command-line values taking precedence
fn load_codec(cli: &Cli) -> Result<EncryptedString> {
    let config = EncryptionConfig::from_env_with_overrides(
        cli.key.as_deref(),
        &cli.fallback_keys,
        cli.ttl_secs.as_deref(),
    )?;
    Ok(config.build_codec())
}
