//! `MinHeapQueue` - the binary min-heap priority queue strategy.
//!
//! Entries live in a `Vec` laid out as an implicit binary tree. Only the
//! priority takes part in comparisons, so keys need no ordering.

use super::PriorityQueue;
use core::fmt;

/// A priority queue implemented with a binary min-heap.
///
/// The root is always an entry with the smallest priority.
#[derive(Clone)]
pub struct MinHeapQueue<K, P> {
    data: Vec<(K, P)>,
}

impl<K, P: Ord> MinHeapQueue<K, P> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with a specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the entry that `extract_min` would return next.
    pub fn peek(&self) -> Option<(&K, &P)> {
        self.data.first().map(|(key, priority)| (key, priority))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.data[a].1 < self.data[b].1
    }
}

impl<K, P: Ord> PriorityQueue<K, P> for MinHeapQueue<K, P> {
    fn insert(&mut self, key: K, priority: P) {
        self.data.push((key, priority));
        self.sift_up(self.data.len() - 1);
    }

    fn extract_min(&mut self) -> Option<(K, P)> {
        if self.data.is_empty() {
            return None;
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let entry = self.data.pop()?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(entry)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<K, P: Ord> Default for MinHeapQueue<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> fmt::Debug for MinHeapQueue<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeapQueue")
            .field("len", &self.data.len())
            .finish()
    }
}
