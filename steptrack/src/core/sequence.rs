//! Owned, growable sequence of daily step counts.

use std::slice::{Iter, IterMut};

/// Ordered, index-addressable list of step counts.
///
/// Thin wrapper over `Vec<i32>` that exposes the dynamic-array operations the
/// pipeline exercises. All accessors are bounds-checked and return `Option`
/// rather than panicking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepSequence {
    days: Vec<i32>,
}

impl StepSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            days: Vec::with_capacity(capacity),
        }
    }

    /// Build a sequence of `len` copies of `value`.
    pub fn filled(len: usize, value: i32) -> Self {
        Self {
            days: vec![value; len],
        }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Allocated slots. Informational only; growth strategy is the allocator's.
    pub fn capacity(&self) -> usize {
        self.days.capacity()
    }

    pub fn front(&self) -> Option<i32> {
        self.days.first().copied()
    }

    pub fn back(&self) -> Option<i32> {
        self.days.last().copied()
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.days.get(index).copied()
    }

    pub fn front_mut(&mut self) -> Option<&mut i32> {
        self.days.first_mut()
    }

    pub fn back_mut(&mut self) -> Option<&mut i32> {
        self.days.last_mut()
    }

    pub fn push(&mut self, value: i32) {
        self.days.push(value);
    }

    pub fn pop(&mut self) -> Option<i32> {
        self.days.pop()
    }

    /// Insert `value` at `index`, shifting later elements right.
    ///
    /// Returns `false` (and leaves the sequence untouched) when `index > len`.
    pub fn insert(&mut self, index: usize, value: i32) -> bool {
        if index > self.days.len() {
            return false;
        }
        self.days.insert(index, value);
        true
    }

    /// Remove and return the element at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<i32> {
        if index >= self.days.len() {
            return None;
        }
        Some(self.days.remove(index))
    }

    pub fn reserve(&mut self, additional: usize) {
        self.days.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.days.shrink_to_fit();
    }

    /// Exchange the full contents of two sequences.
    pub fn swap_with(&mut self, other: &mut StepSequence) {
        std::mem::swap(&mut self.days, &mut other.days);
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.days
    }

    pub fn iter(&self) -> Iter<'_, i32> {
        self.days.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, i32> {
        self.days.iter_mut()
    }
}

impl From<Vec<i32>> for StepSequence {
    fn from(days: Vec<i32>) -> Self {
        Self { days }
    }
}

impl FromIterator<i32> for StepSequence {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}
