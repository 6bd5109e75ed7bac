//! Priority-queue strategies.
//!
//! Shortest path uses a queue as a relaxation log: the same key may be inserted
//! several times with different priorities, and stale entries are extracted
//! later and discarded by the caller. Neither strategy deduplicates keys.
//!
//! ### Performance Characteristics
//! | Strategy | `insert` | `extract_min` |
//! |----------|----------|---------------|
//! | [`UnsortedQueue`] | \(O(1)\) | \(O(n)\) linear scan |
//! | [`MinHeapQueue`] | \(O(\log n)\) | \(O(\log n)\) |

pub mod binary_heap;
pub mod unsorted;

pub use binary_heap::MinHeapQueue;
pub use unsorted::UnsortedQueue;

/// A min-priority queue of `(key, priority)` entries.
pub trait PriorityQueue<K, P: Ord> {
    /// Adds an entry. Entries with an equal key may coexist.
    fn insert(&mut self, key: K, priority: P);

    /// Removes and returns an entry with the smallest priority.
    fn extract_min(&mut self) -> Option<(K, P)>;

    /// Returns the number of entries currently queued.
    fn len(&self) -> usize;

    /// Returns `true` if no entries are queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
