// ABOUTME: Re-exports command modules for brussels-cli
// ABOUTME: Provides key generation and token encrypt/decrypt/rotate commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

pub mod key;
pub mod token;
