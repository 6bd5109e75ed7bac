//! Weighted graph stores and the algorithms that run over them.
//!
//! Graph implementations are organized into categories:
//! - `basic`: the adjacency-list and adjacency-matrix stores
//! - `algorithms`: shortest path, spanning tree, traversal and ordering
//!
//! Both stores share the [`NodeRegistry`] for value-based node identity and
//! implement [`WeightedGraph`] (reads) and [`GraphMut`] (mutation).

pub mod algorithms;
pub mod basic;
pub mod edge_type;
pub mod node;
pub mod traits;

// Re-export commonly used types from submodules
pub use basic::{AdjListGraph, AdjMatrixGraph};
pub use edge_type::{Directed, EdgeType, Undirected};
pub use node::{NodeId, NodeRegistry};
pub use traits::{GraphMut, WeightedGraph};

/// Edge weight. Negative weights are storable but unsupported by shortest path.
pub type Weight = i64;

/// Weight used by [`GraphMut::add_unweighted_edge`] and by imported edges
/// without a `weight` attribute.
pub const DEFAULT_WEIGHT: Weight = 1;
