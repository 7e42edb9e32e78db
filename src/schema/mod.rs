// ABOUTME: Schema fragments composed explicitly into table definitions
// ABOUTME: Dialect capability table, column definitions, mixins, naming and pre-insert hooks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

//! # Schema Fragments
//!
//! Tables are assembled from [`SchemaMixin`] fragments and plain columns in
//! the order they are declared. Backend differences are looked up once in
//! [`DialectCapabilities`] and the values a backend cannot generate itself
//! are filled in by [`PreInsert`] hooks that the persistence layer calls
//! before each write.

/// Column definitions and logical types
pub mod column;
/// Supported dialects and their capabilities
pub mod dialect;
/// Pre-insert and pre-update hooks
pub mod hooks;
/// Reusable column fragments
pub mod mixins;
/// Constraint naming convention
pub mod naming;
/// Record fragments for key and timestamp fields
pub mod records;
/// Table schema builder and DDL rendering
pub mod table;

pub use column::{ColumnDef, ColumnType, ForeignKey, ServerDefault};
pub use dialect::{Dialect, DialectCapabilities};
pub use hooks::{InsertContext, PreInsert, PreUpdate};
pub use mixins::{OrderedMixin, PrimaryKeyMixin, SchemaMixin, TimestampMixin};
pub use naming::NamingConvention;
pub use records::{PrimaryKey, Timestamps};
pub use table::{TableSchema, TableSchemaBuilder};
