// ABOUTME: Host adapters connecting codecs and schemas to a concrete database driver
// ABOUTME: Currently provides the sqlx SQLite adapter behind the `sqlite` feature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

/// `SQLite` adapter over `sqlx`
pub mod sqlite;

pub use sqlite::{bind_column, create_table, read_column, SqliteQuery};
