// ABOUTME: Record fragments embedded in entities for the primary key and timestamp columns
// ABOUTME: Each fragment implements the pre-insert and pre-update hooks for its own fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use super::hooks::{InsertContext, PreInsert, PreUpdate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `id` column value
///
/// Left empty until insert. Dialects that generate `uuidv7()` server-side
/// fill it from the returned row; the others get a random v4 id from the
/// pre-insert hook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryKey {
    /// Assigned identifier
    pub id: Option<Uuid>,
}

impl PrimaryKey {
    /// Key loaded from storage
    #[must_use]
    pub const fn from_stored(id: Uuid) -> Self {
        Self { id: Some(id) }
    }
}

impl PreInsert for PrimaryKey {
    fn pre_insert(&mut self, ctx: &InsertContext) {
        if self.id.is_none() && !ctx.capabilities.server_uuid_v7 {
            self.id = Some(Uuid::new_v4());
        }
    }
}

/// `created_at`, `updated_at` and soft-delete `deleted_at`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    /// First insert
    pub created_at: Option<DateTime<Utc>>,
    /// Last write
    pub updated_at: Option<DateTime<Utc>>,
    /// Soft-delete marker
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// Soft-delete at `now`
    pub fn mark_deleted(&mut self, now: DateTime<Utc>) {
        self.deleted_at = Some(now);
        self.updated_at = Some(now);
    }

    /// Whether the record is soft-deleted
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl PreInsert for Timestamps {
    fn pre_insert(&mut self, ctx: &InsertContext) {
        if self.created_at.is_none() {
            self.created_at = Some(ctx.now);
        }
        self.updated_at = Some(ctx.now);
    }
}

impl PreUpdate for Timestamps {
    fn pre_update(&mut self, ctx: &InsertContext) {
        self.updated_at = Some(ctx.now);
    }
}
