//! Basic graph stores.
//!
//! Two representations of the same weighted graph, both built on the
//! deduplicating [`NodeRegistry`](crate::NodeRegistry):
//! - [`AdjListGraph`]: per-node ordered edge lists, suited to sparse graphs.
//! - [`AdjMatrixGraph`]: dense weight matrix with `0` meaning "no edge".

pub mod adj_list;
pub mod adj_matrix;

pub use adj_list::{AdjListGraph, DiAdjListGraph};
pub use adj_matrix::{AdjMatrixGraph, DiAdjMatrixGraph, MatrixNeighbors};
