// ABOUTME: Derived ordinal carried by every member of an ordered collection
// ABOUTME: Only the position maintainer or a row mapper loading stored rows can set it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use serde::Serialize;

/// Zero-based ordinal of a member within its collection
///
/// Fresh members start unassigned. The value is stale once a member leaves
/// its collection. Serialization is one-way: a position is never read back
/// from an external document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Position(Option<i32>);

impl Position {
    /// Value read from the `position` column of a stored row
    ///
    /// For row mappers only. Members built this way are reordered and
    /// renumbered by [`crate::ordering::OrderingList::from_loaded`], and any
    /// list mutation overwrites the value.
    #[must_use]
    pub const fn from_stored(position: i32) -> Self {
        Self(Some(position))
    }

    /// Current ordinal, `None` until the member joins a collection
    #[must_use]
    pub const fn get(self) -> Option<i32> {
        self.0
    }

    pub(crate) fn assign(&mut self, position: i32) {
        self.0 = Some(position);
    }
}

/// A record carrying a [`Position`]
pub trait Positioned {
    /// Embedded position field
    fn ordinal(&self) -> &Position;

    /// Embedded position field, mutable for the maintainer
    fn ordinal_mut(&mut self) -> &mut Position;

    /// Current ordinal
    fn position(&self) -> Option<i32> {
        self.ordinal().get()
    }
}
