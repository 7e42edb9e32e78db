// ABOUTME: Database URL configuration for SQLite and PostgreSQL connections
// ABOUTME: Parses DATABASE_URL and resolves the schema dialect it implies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use crate::schema::Dialect;
use brussels_core::constants::env_config;
use brussels_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use tracing::debug;

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// `PostgreSQL` connection
    PostgreSQL {
        /// `PostgreSQL` connection string
        connection_string: String,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty or names an unsupported scheme
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::config_invalid("DATABASE_URL is empty"));
        }

        if let Some(path) = s.strip_prefix("sqlite:") {
            let path = path.strip_prefix("//").unwrap_or(path);
            if path == ":memory:" {
                Ok(Self::Memory)
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path),
                })
            }
        } else if s.starts_with("postgresql://") || s.starts_with("postgres://") {
            Ok(Self::PostgreSQL {
                connection_string: s.to_owned(),
            })
        } else if s.contains("://") {
            Err(AppError::config_invalid(format!(
                "Unsupported database URL scheme in '{s}'"
            )))
        } else {
            // Bare path: treat as SQLite file
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Load from `DATABASE_URL`, defaulting to in-memory `SQLite`
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set to an invalid URL
    pub fn from_env() -> AppResult<Self> {
        let url = match env::var(env_config::DATABASE_URL) {
            Ok(value) => Self::parse_url(&value)?,
            Err(_) => Self::Memory,
        };
        debug!(dialect = %url.dialect(), "Resolved database URL");
        Ok(url)
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::PostgreSQL { connection_string } => connection_string.clone(),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Schema dialect for this backend
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        match self {
            Self::SQLite { .. } | Self::Memory => Dialect::Sqlite,
            Self::PostgreSQL { .. } => Dialect::Postgresql,
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::Memory
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            // Never print credentials
            Self::PostgreSQL { .. } => write!(f, "postgresql://<redacted>"),
            other => write!(f, "{}", other.to_connection_string()),
        }
    }
}
