//! Graph algorithms over [`WeightedGraph`](crate::WeightedGraph) stores.
//!
//! Each algorithm allocates its own scratch state (distance tables, visited
//! flags, union-find, in-degree counts) per call and never mutates the store,
//! so any number of calls may run over one store.

pub mod connectivity;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod shortest_path;
pub mod spanning_tree;
pub mod topological;
pub mod traversal;

pub use connectivity::{connected_components, is_connected};
#[cfg(feature = "parallel")]
pub use parallel::{all_pairs_shortest_paths, shortest_paths_from_many};
pub use shortest_path::{dijkstra, dijkstra_with, shortest_paths, Distance, ShortestPaths};
pub use spanning_tree::minimum_spanning_tree;
pub use topological::{is_dag, toposort};
pub use traversal::{depth_first, Dfs};
