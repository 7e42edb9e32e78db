// ABOUTME: Core types and constants for the brussels persistence building blocks
// ABOUTME: Foundation crate with error handling, the dynamic column value, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

#![deny(unsafe_code)]

//! # Brussels Core
//!
//! Foundation crate providing the shared types every column codec and schema
//! fragment in `brussels` builds on. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the codec-level `CodecError`
//! - **value**: `ColumnValue`, the dynamically typed value crossing the host boundary
//! - **constants**: Key sizes, token layout, and environment variable names

/// Unified error handling system with standard error codes
pub mod errors;

/// Dynamically typed column values exchanged with the host mapping layer
pub mod value;

/// Constants organized by domain
pub mod constants;

pub use errors::{AppError, AppResult, CodecError, CodecResult, ErrorCode};
pub use value::ColumnValue;
