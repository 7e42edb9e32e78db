// ABOUTME: Reusable column fragments contributed to a table by explicit composition
// ABOUTME: Primary key, timestamp and ordered-position fragments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use super::column::{ColumnDef, ColumnType, ServerDefault};

/// A named set of columns merged into a table schema
pub trait SchemaMixin {
    /// Name reported when two fragments declare the same column
    fn name(&self) -> &'static str;

    /// Columns contributed, in declaration order
    fn columns(&self) -> Vec<ColumnDef>;
}

/// `id` UUID primary key, generated server-side where supported
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimaryKeyMixin;

impl SchemaMixin for PrimaryKeyMixin {
    fn name(&self) -> &'static str {
        "PrimaryKeyMixin"
    }

    fn columns(&self) -> Vec<ColumnDef> {
        vec![ColumnDef::new("id", ColumnType::Uuid)
            .primary_key()
            .unique()
            .indexed()
            .derived()
            .server_default(ServerDefault::UuidV7)]
    }
}

/// `created_at`, `updated_at` and a nullable `deleted_at`
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampMixin;

impl SchemaMixin for TimestampMixin {
    fn name(&self) -> &'static str {
        "TimestampMixin"
    }

    fn columns(&self) -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("created_at", ColumnType::DateTimeUtc)
                .derived()
                .server_default(ServerDefault::CurrentTimestamp),
            ColumnDef::new("updated_at", ColumnType::DateTimeUtc)
                .derived()
                .server_default(ServerDefault::CurrentTimestamp),
            ColumnDef::new("deleted_at", ColumnType::DateTimeUtc)
                .nullable()
                .derived(),
        ]
    }
}

/// Integer `position` maintained by the ordering list
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedMixin;

impl SchemaMixin for OrderedMixin {
    fn name(&self) -> &'static str {
        "OrderedMixin"
    }

    fn columns(&self) -> Vec<ColumnDef> {
        vec![ColumnDef::new("position", ColumnType::Integer)
            .indexed()
            .derived()]
    }
}
