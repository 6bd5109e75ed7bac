//! `UnsortedQueue` - the linear-scan priority queue strategy.

use super::PriorityQueue;

/// Holds entries in arrival order and scans them all on extraction.
///
/// Among entries of equal priority the earliest inserted is extracted first.
#[derive(Debug, Clone)]
pub struct UnsortedQueue<K, P> {
    entries: Vec<(K, P)>,
}

impl<K, P> UnsortedQueue<K, P> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty queue with space for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K, P: Ord> PriorityQueue<K, P> for UnsortedQueue<K, P> {
    fn insert(&mut self, key: K, priority: P) {
        self.entries.push((key, priority));
    }

    fn extract_min(&mut self) -> Option<(K, P)> {
        let mut best = 0;
        for (idx, (_, priority)) in self.entries.iter().enumerate().skip(1) {
            if *priority < self.entries[best].1 {
                best = idx;
            }
        }
        if self.entries.is_empty() {
            None
        } else {
            // `remove` keeps arrival order for later ties.
            Some(self.entries.remove(best))
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, P> Default for UnsortedQueue<K, P> {
    fn default() -> Self {
        Self::new()
    }
}
