// ABOUTME: Constraint and index naming convention rendered from printf-style templates
// ABOUTME: Keeps generated constraint names deterministic across dialects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use serde::{Deserialize, Serialize};

/// Naming templates for generated constraints
///
/// Placeholders: `%(table_name)s`, `%(column_0_name)s`, `%(column_0_label)s`,
/// `%(constraint_name)s` and `%(referred_table_name)s`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConvention {
    /// Secondary index
    pub index: String,
    /// Unique constraint
    pub unique: String,
    /// Check constraint
    pub check: String,
    /// Foreign key
    pub foreign_key: String,
    /// Primary key
    pub primary_key: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            index: "ix_%(column_0_label)s".to_owned(),
            unique: "uq_%(table_name)s_%(column_0_name)s".to_owned(),
            check: "ck_%(table_name)s_%(constraint_name)s".to_owned(),
            foreign_key: "fk_%(table_name)s_%(column_0_name)s_%(referred_table_name)s".to_owned(),
            primary_key: "pk_%(table_name)s".to_owned(),
        }
    }
}

/// Values substituted into a template
#[derive(Debug, Clone, Copy, Default)]
pub struct NameParts<'a> {
    /// Owning table
    pub table: &'a str,
    /// First constrained column
    pub column: &'a str,
    /// Explicit constraint name (check constraints)
    pub constraint: &'a str,
    /// Referred table (foreign keys)
    pub referred_table: &'a str,
}

impl NamingConvention {
    /// Index name for a column
    #[must_use]
    pub fn index_name(&self, table: &str, column: &str) -> String {
        render(
            &self.index,
            NameParts {
                table,
                column,
                ..NameParts::default()
            },
        )
    }

    /// Unique constraint name for a column
    #[must_use]
    pub fn unique_name(&self, table: &str, column: &str) -> String {
        render(
            &self.unique,
            NameParts {
                table,
                column,
                ..NameParts::default()
            },
        )
    }

    /// Check constraint name
    #[must_use]
    pub fn check_name(&self, table: &str, constraint: &str) -> String {
        render(
            &self.check,
            NameParts {
                table,
                constraint,
                ..NameParts::default()
            },
        )
    }

    /// Foreign key constraint name
    #[must_use]
    pub fn foreign_key_name(&self, table: &str, column: &str, referred_table: &str) -> String {
        render(
            &self.foreign_key,
            NameParts {
                table,
                column,
                referred_table,
                ..NameParts::default()
            },
        )
    }

    /// Primary key constraint name
    #[must_use]
    pub fn primary_key_name(&self, table: &str) -> String {
        render(
            &self.primary_key,
            NameParts {
                table,
                ..NameParts::default()
            },
        )
    }
}

/// Substitute every placeholder of `template`
#[must_use]
pub fn render(template: &str, parts: NameParts<'_>) -> String {
    let label = format!("{}_{}", parts.table, parts.column);
    template
        .replace("%(table_name)s", parts.table)
        .replace("%(column_0_name)s", parts.column)
        .replace("%(column_0_label)s", &label)
        .replace("%(constraint_name)s", parts.constraint)
        .replace("%(referred_table_name)s", parts.referred_table)
}
