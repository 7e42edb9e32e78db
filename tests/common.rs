// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides test logging, the fixed model key and a positioned test entity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `brussels`

use brussels::ordering::{OrderingList, Position, Positioned};
use brussels::schema::{InsertContext, PreInsert, PreUpdate, PrimaryKey, Timestamps};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Key whose decoded bytes are `0123456789abcdef0123456789abcdef`
pub const MODEL_KEY: &str = "MDEyMzQ1Njc4OWFiY2RlZjAxMjM0NTY3ODlhYmNkZWY=";

/// A valid key distinct from [`MODEL_KEY`]
pub const OTHER_KEY: &str = "FC-c_21-lM4W6v8kWngjNjVj8T0ohgYVgSS_6G1iD2M=";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Entity composed from the primary key, timestamp and position fragments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub key: PrimaryKey,
    pub stamps: Timestamps,
    pub position: Position,
    pub name: String,
}

impl TodoItem {
    pub fn new(name: &str) -> Self {
        Self {
            key: PrimaryKey::default(),
            stamps: Timestamps::default(),
            position: Position::default(),
            name: name.to_owned(),
        }
    }
}

impl Positioned for TodoItem {
    fn ordinal(&self) -> &Position {
        &self.position
    }

    fn ordinal_mut(&mut self) -> &mut Position {
        &mut self.position
    }
}

impl PreInsert for TodoItem {
    fn pre_insert(&mut self, ctx: &InsertContext) {
        self.key.pre_insert(ctx);
        self.stamps.pre_insert(ctx);
    }
}

impl PreUpdate for TodoItem {
    fn pre_update(&mut self, ctx: &InsertContext) {
        self.stamps.pre_update(ctx);
    }
}

/// List built by appending `names` in order
pub fn list_of(names: &[&str]) -> OrderingList<TodoItem> {
    let mut list = OrderingList::new();
    for name in names {
        list.push(TodoItem::new(name));
    }
    list
}

/// Names in list order
pub fn names(list: &OrderingList<TodoItem>) -> Vec<&str> {
    list.iter().map(|item| item.name.as_str()).collect()
}

/// Positions in list order
pub fn positions(list: &OrderingList<TodoItem>) -> Vec<Option<i32>> {
    list.iter().map(Positioned::position).collect()
}
