// ABOUTME: Explicit pre-insert and pre-update hooks invoked by the persistence layer
// ABOUTME: Hooks receive the dialect capabilities and a clock instead of inspecting global state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use super::dialect::{Dialect, DialectCapabilities};
use chrono::{DateTime, Utc};

/// Everything a hook may consult
#[derive(Debug, Clone, Copy)]
pub struct InsertContext {
    /// Capabilities of the backend the row is written to
    pub capabilities: DialectCapabilities,
    /// Clock reading shared by every hook of one write
    pub now: DateTime<Utc>,
}

impl InsertContext {
    /// Context for `dialect` at the current time
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self::at(dialect, Utc::now())
    }

    /// Context for `dialect` at a fixed time
    #[must_use]
    pub const fn at(dialect: Dialect, now: DateTime<Utc>) -> Self {
        Self {
            capabilities: dialect.capabilities(),
            now,
        }
    }
}

/// Runs before a record is first inserted
///
/// Entities built from several fragments implement this by calling each
/// fragment's hook in declaration order.
pub trait PreInsert {
    /// Fill in values the backend will not generate
    fn pre_insert(&mut self, ctx: &InsertContext);
}

/// Runs before an existing record is updated
pub trait PreUpdate {
    /// Refresh derived values
    fn pre_update(&mut self, ctx: &InsertContext);
}
