//! # `trellis` - Weighted Graph Toolkit
//!
//! A small in-memory weighted-graph toolkit: two storage representations
//! (adjacency list and adjacency matrix) over a deduplicating node registry,
//! and the classic algorithm families that run over them.
//!
//! ## Key Features
//!
//! - **Value-based node identity**: adding an equal value twice yields the same
//!   [`NodeId`]. Handles are stable arena indices and are never reused.
//! - **Explicit direction**: every store is generic over an [`EdgeType`]
//!   marker ([`Undirected`] or [`Directed`]), so an algorithm states in its
//!   signature which convention it expects.
//! - **Pluggable priority queues**: shortest path is generic over
//!   [`PriorityQueue`], with a linear-scan and a binary min-heap strategy.
//! - **Branded per-call state**: union-find tables live inside a
//!   [`GhostToken`] scope created for a single algorithm call.
//!
//! ## Algorithms
//!
//! | Family | Entry point | Convention |
//! |--------|-------------|------------|
//! | Shortest path (Dijkstra) | [`algorithms::dijkstra`] | either |
//! | Minimum spanning tree (Kruskal) | [`algorithms::minimum_spanning_tree`] | undirected |
//! | Depth-first traversal | [`algorithms::depth_first`], [`algorithms::Dfs`] | either |
//! | Connectivity | [`algorithms::connected_components`] | undirected |
//! | Cycle detection / topological order | [`algorithms::is_dag`], [`algorithms::toposort`] | directed |
//!
//! ## Feature Flags
//!
//! - `parallel`: fan out independent shortest-path runs with rayon.
//! - `tracing`: emit `tracing` events from the algorithms.
//!
//! ## Example
//!
//! ```rust
//! use trellis::algorithms::{dijkstra, Distance};
//! use trellis::{AdjListGraph, GraphMut, MinHeapQueue};
//!
//! let mut graph = AdjListGraph::<&str>::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_edge(a, b, 1);
//! graph.add_edge(b, c, 2);
//!
//! let paths = dijkstra::<_, MinHeapQueue<_, _>>(&graph, a).unwrap();
//! assert_eq!(paths.distance(c), Some(Distance::Finite(3)));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod log;

pub mod collections;
pub mod error;
pub mod graph;
pub mod io;
pub mod token;

pub use collections::{
    ActiveDisjointSet, BrandedDisjointSet, MinHeapQueue, PriorityQueue, UnsortedQueue,
};
pub use error::{ImportError, SnapshotError};
pub use graph::algorithms;
pub use graph::{
    AdjListGraph, AdjMatrixGraph, Directed, EdgeType, GraphMut, NodeId, NodeRegistry,
    Undirected, Weight, WeightedGraph, DEFAULT_WEIGHT,
};
pub use token::GhostToken;
