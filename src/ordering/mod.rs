// ABOUTME: Ordered-position maintenance for to-many collections
// ABOUTME: Keeps each member's position equal to its index after every structural change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

//! # Ordered Positions
//!
//! Members embed a [`Position`] and expose it through [`Positioned`].
//! [`OrderingList`] wraps a `Vec` and invokes the [`PositionMaintainer`]
//! hooks after each push, insert, remove and pop. Hosts that keep their own
//! sequence type call the hooks directly.

/// Ordered collection wrapper
pub mod list;
/// Collection-mutation hooks
pub mod maintainer;
/// Position field and the positioned-member trait
pub mod position;

pub use list::OrderingList;
pub use maintainer::PositionMaintainer;
pub use position::{Position, Positioned};
