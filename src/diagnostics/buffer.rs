// SPDX-License-Identifier: MPL-2.0
//! Circular buffer for diagnostic event storage.
//!
//! A memory-bounded ring buffer that evicts the oldest entries when capacity
//! is reached.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Validated buffer capacity.
///
/// Values outside `MIN..=MAX` are clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Minimum number of retained events.
    pub const MIN: usize = 100;
    /// Maximum number of retained events.
    pub const MAX: usize = 10_000;
    /// Default number of retained events.
    pub const DEFAULT: usize = 1_000;

    /// Creates a capacity, clamping to the valid range.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self(capacity.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// A ring buffer that holds the last `capacity` items pushed.
///
/// Once full, every push drops the oldest item. Iteration runs oldest
/// to newest.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: NonZeroUsize,
}

impl<T> CircularBuffer<T> {
    /// Builds a buffer sized by a validated [`BufferCapacity`].
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer with a raw capacity value, useful for tests with
    /// tiny capacities. Production code goes through [`CircularBuffer::new`].
    /// A zero capacity is bumped to one.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            data: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Pushes an element, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() == self.capacity.get() {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Iterates in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_clamps_to_valid_range() {
        assert_eq!(BufferCapacity::new(0).value(), BufferCapacity::MIN);
        assert_eq!(BufferCapacity::new(100_000).value(), BufferCapacity::MAX);
        assert_eq!(BufferCapacity::new(500).value(), 500);
    }

    #[test]
    fn default_capacity_is_one_thousand() {
        assert_eq!(BufferCapacity::default().value(), BufferCapacity::DEFAULT);
    }

    #[test]
    fn push_and_iterate_in_order() {
        let mut buffer = CircularBuffer::with_raw_capacity(10);
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);

        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn push_beyond_capacity_evicts_oldest() {
        let mut buffer = CircularBuffer::with_raw_capacity(3);
        for i in 1..=5 {
            buffer.push(i);
        }

        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn zero_raw_capacity_is_bumped_to_one() {
        let mut buffer = CircularBuffer::with_raw_capacity(0);
        buffer.push("a");
        buffer.push("b");

        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.iter().next(), Some(&"b"));
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut buffer = CircularBuffer::with_raw_capacity(4);
        buffer.push(1);
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 4);
    }
}
