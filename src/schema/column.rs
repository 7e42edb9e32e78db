// ABOUTME: Column definitions with logical types resolved to physical types per dialect
// ABOUTME: Builder-style ColumnDef carrying key, nullability, index and default flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use super::dialect::Dialect;
use serde::{Deserialize, Serialize};

/// Logical column type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// 128-bit identifier
    Uuid,
    /// Signed integer
    Integer,
    /// Unbounded text
    Text,
    /// Boolean flag
    Boolean,
    /// Timestamp normalized to UTC by the datetime codec
    DateTimeUtc,
    /// Text encrypted at rest by the encrypted string codec
    EncryptedString,
    /// JSON document
    Json,
}

impl ColumnType {
    /// Physical SQL type for a dialect
    #[must_use]
    pub const fn physical_type(self, dialect: Dialect) -> &'static str {
        let caps = dialect.capabilities();
        match self {
            Self::Uuid if caps.native_uuid => "UUID",
            Self::Uuid | Self::Text | Self::EncryptedString => "TEXT",
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::DateTimeUtc if caps.timestamptz => "TIMESTAMP WITH TIME ZONE",
            Self::DateTimeUtc => "TIMESTAMP",
            Self::Json if caps.jsonb => "JSONB",
            Self::Json => "JSON",
        }
    }
}

/// Server-side default expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerDefault {
    /// `uuidv7()`, only emitted where the dialect can generate it
    UuidV7,
    /// `CURRENT_TIMESTAMP`
    CurrentTimestamp,
    /// Literal SQL expression, parenthesized when rendered
    Expression(String),
}

impl ServerDefault {
    /// Default clause for a dialect, `None` when the dialect lacks support
    #[must_use]
    pub fn render(&self, dialect: Dialect) -> Option<String> {
        match self {
            Self::UuidV7 => dialect
                .capabilities()
                .server_uuid_v7
                .then(|| "uuidv7()".to_owned()),
            Self::CurrentTimestamp => Some("CURRENT_TIMESTAMP".to_owned()),
            Self::Expression(expr) => Some(format!("({expr})")),
        }
    }
}

/// Reference to a column of another table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Referred table
    pub table: String,
    /// Referred column
    pub column: String,
}

/// A single column declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)] // Column flags map one-to-one onto DDL keywords
pub struct ColumnDef {
    /// Column name
    pub name: String,
    /// Logical type
    pub column_type: ColumnType,
    /// Part of the primary key
    pub primary_key: bool,
    /// Accepts NULL
    pub nullable: bool,
    /// Unique constraint
    pub unique: bool,
    /// Secondary index
    pub index: bool,
    /// Caller supplies the value at construction
    pub constructor: bool,
    /// Server-side default
    pub server_default: Option<ServerDefault>,
    /// Foreign key reference
    pub foreign_key: Option<ForeignKey>,
}

impl ColumnDef {
    /// Non-null column set by the caller at construction
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            primary_key: false,
            nullable: false,
            unique: false,
            index: false,
            constructor: true,
            server_default: None,
            foreign_key: None,
        }
    }

    /// Mark as primary key
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Allow NULL
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Add a unique constraint
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Add a secondary index
    #[must_use]
    pub fn indexed(mut self) -> Self {
        self.index = true;
        self
    }

    /// Exclude from the constructor; the value is derived or server-generated
    #[must_use]
    pub fn derived(mut self) -> Self {
        self.constructor = false;
        self
    }

    /// Attach a server-side default
    #[must_use]
    pub fn server_default(mut self, default: ServerDefault) -> Self {
        self.server_default = Some(default);
        self
    }

    /// Reference another table's column
    #[must_use]
    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.foreign_key = Some(ForeignKey {
            table: table.into(),
            column: column.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_variant_per_dialect() {
        assert_eq!(ColumnType::Json.physical_type(Dialect::Postgresql), "JSONB");
        assert_eq!(ColumnType::Json.physical_type(Dialect::Sqlite), "JSON");
    }

    #[test]
    fn test_uuid_default_dropped_on_sqlite() {
        assert_eq!(ServerDefault::UuidV7.render(Dialect::Sqlite), None);
        assert_eq!(
            ServerDefault::UuidV7.render(Dialect::Postgresql).as_deref(),
            Some("uuidv7()")
        );
    }
}
