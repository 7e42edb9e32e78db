// ABOUTME: Ordered collection that renumbers member positions on every structural mutation
// ABOUTME: Sorting stays manual: callers renumber with an explicit reorder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use super::maintainer::PositionMaintainer;
use super::position::Positioned;
use std::cmp::Ordering;
use std::ops::Deref;

/// Ordered to-many collection of positioned members
///
/// After any mutation through this type, member positions are `0..len` in
/// index order. Changing the order through [`Self::sort_by`] or
/// [`Self::as_mut_slice`] leaves positions untouched until [`Self::reorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingList<T> {
    members: Vec<T>,
}

impl<T> Default for OrderingList<T> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<T: Positioned> OrderingList<T> {
    /// Empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Collection loaded from storage
    ///
    /// Members are ordered by stored position (unassigned last, ties keep
    /// their load order) and then renumbered to close any gaps.
    #[must_use]
    pub fn from_loaded(mut members: Vec<T>) -> Self {
        members.sort_by(|a, b| match (a.position(), b.position()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        PositionMaintainer::renumber(&mut members);
        Self { members }
    }

    /// Append at the end, taking the next free position
    pub fn push(&mut self, member: T) {
        self.members.push(member);
        PositionMaintainer::on_append(&mut self.members);
    }

    /// Insert at `index`, shifting later members right
    ///
    /// An index past the end appends.
    pub fn insert(&mut self, index: usize, member: T) {
        let index = index.min(self.members.len());
        self.members.insert(index, member);
        PositionMaintainer::on_insert(&mut self.members, index);
    }

    /// Remove the first member equal to `member`
    pub fn remove(&mut self, member: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.remove_where(|candidate| candidate == member)
    }

    /// Remove the first member matching `predicate`
    pub fn remove_where(&mut self, predicate: impl FnMut(&T) -> bool) -> Option<T> {
        let index = self.members.iter().position(predicate)?;
        self.remove_at(index)
    }

    /// Delete the member at `index`
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.members.len() {
            return None;
        }
        let removed = self.members.remove(index);
        PositionMaintainer::on_remove(&mut self.members, index);
        Some(removed)
    }

    /// Remove and return the last member, keeping its stale position
    pub fn pop(&mut self) -> Option<T> {
        let index = self.members.len().checked_sub(1)?;
        self.pop_at(index)
    }

    /// Remove and return the member at `index`, keeping its stale position
    pub fn pop_at(&mut self, index: usize) -> Option<T> {
        if index >= self.members.len() {
            return None;
        }
        let popped = self.members.remove(index);
        PositionMaintainer::on_pop(&mut self.members, index);
        Some(popped)
    }

    /// Renumber positions to match the current order
    pub fn reorder(&mut self) {
        PositionMaintainer::on_explicit_reorder(&mut self.members);
    }

    /// Sort in place without renumbering
    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) {
        self.members.sort_by(compare);
    }

    /// Sort in place by key without renumbering
    pub fn sort_by_key<K: Ord>(&mut self, key: impl FnMut(&T) -> K) {
        self.members.sort_by_key(key);
    }

    /// Keep only members matching `keep`, then renumber
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.members.retain(keep);
        PositionMaintainer::renumber(&mut self.members);
    }

    /// Mutable access to members for in-place changes, without renumbering
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.members
    }

    /// Whether positions are exactly `0..len` in index order
    #[must_use]
    pub fn is_dense(&self) -> bool {
        PositionMaintainer::is_dense(&self.members)
    }

    /// Take the members out, positions as last maintained
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.members
    }
}

impl<T> Deref for OrderingList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.members
    }
}

impl<T: Positioned> Extend<T> for OrderingList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.members.extend(iter);
        PositionMaintainer::renumber(&mut self.members);
    }
}

impl<T: Positioned> FromIterator<T> for OrderingList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for OrderingList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderingList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
