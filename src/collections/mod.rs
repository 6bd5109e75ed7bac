//! Supporting collections for the graph algorithms.
//!
//! Collections are organized by role:
//! - `queue`: priority-queue strategies consumed by shortest path
//! - `other`: branded union-find used by spanning tree and connectivity

pub mod other;
pub mod queue;

// Re-export commonly used types from submodules
pub use other::{ActiveDisjointSet, BrandedDisjointSet};
pub use queue::{MinHeapQueue, PriorityQueue, UnsortedQueue};
