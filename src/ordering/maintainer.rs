// ABOUTME: Collection-mutation hooks that keep member positions dense and zero-based
// ABOUTME: Called synchronously after each structural change, before positions are observed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use super::position::Positioned;

/// Position maintenance for hosts that own their sequence type
///
/// Every hook receives the sequence as it is after the mutation. Apart from
/// append, each hook renumbers the whole sequence, which costs O(n).
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionMaintainer;

impl PositionMaintainer {
    /// A member was pushed onto the end
    pub fn on_append<T: Positioned>(members: &mut [T]) {
        let last = members.len().saturating_sub(1);
        if let Some(member) = members.last_mut() {
            member.ordinal_mut().assign(ordinal(last));
        }
    }

    /// A member was inserted at `index`
    pub fn on_insert<T: Positioned>(members: &mut [T], index: usize) {
        debug_assert!(index < members.len().max(1));
        Self::renumber(members);
    }

    /// The member at `index` was removed
    pub fn on_remove<T: Positioned>(members: &mut [T], index: usize) {
        debug_assert!(index <= members.len());
        Self::renumber(members);
    }

    /// The member at `index` was popped and handed back to the caller
    pub fn on_pop<T: Positioned>(members: &mut [T], index: usize) {
        Self::on_remove(members, index);
    }

    /// Members were reordered by some external criterion
    pub fn on_explicit_reorder<T: Positioned>(members: &mut [T]) {
        Self::renumber(members);
    }

    /// Set every position to its index
    pub fn renumber<T: Positioned>(members: &mut [T]) {
        for (index, member) in members.iter_mut().enumerate() {
            member.ordinal_mut().assign(ordinal(index));
        }
    }

    /// Whether positions are exactly `0..n` in index order
    #[must_use]
    pub fn is_dense<T: Positioned>(members: &[T]) -> bool {
        members
            .iter()
            .enumerate()
            .all(|(index, member)| member.position() == Some(ordinal(index)))
    }
}

fn ordinal(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}
