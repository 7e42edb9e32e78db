// ABOUTME: Supported SQL dialects and the per-dialect capability table
// ABOUTME: Capabilities are resolved once instead of comparing backend names at hook time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use brussels_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// SQL backend a schema is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `SQLite`
    Sqlite,
    /// `PostgreSQL`
    Postgresql,
}

impl Dialect {
    /// Canonical dialect name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgresql => "postgresql",
        }
    }

    /// Capabilities of this backend
    #[must_use]
    pub const fn capabilities(self) -> DialectCapabilities {
        match self {
            Self::Sqlite => DialectCapabilities {
                server_uuid_v7: false,
                jsonb: false,
                timestamptz: false,
                native_uuid: false,
            },
            Self::Postgresql => DialectCapabilities {
                server_uuid_v7: true,
                jsonb: true,
                timestamptz: true,
                native_uuid: true,
            },
        }
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "postgresql" | "postgres" => Ok(Self::Postgresql),
            other => Err(AppError::invalid_input(format!(
                "Unsupported dialect '{other}'"
            ))),
        }
    }
}

/// Features that differ between backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // Capability table is a set of independent feature flags
pub struct DialectCapabilities {
    /// Server can generate `uuidv7()` primary keys
    pub server_uuid_v7: bool,
    /// Binary-indexed `JSONB` column type
    pub jsonb: bool,
    /// `TIMESTAMP WITH TIME ZONE` column type
    pub timestamptz: bool,
    /// Native `UUID` column type
    pub native_uuid: bool,
}
