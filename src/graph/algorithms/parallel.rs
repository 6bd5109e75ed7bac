//! Independent shortest-path runs fanned out with rayon.
//!
//! The store is only borrowed immutably; each run allocates its own distance
//! table and queue, so no mutable state is shared between workers.

use super::shortest_path::{dijkstra, ShortestPaths};
use crate::collections::PriorityQueue;
use crate::graph::{NodeId, Weight, WeightedGraph};
use rayon::prelude::*;

/// Runs Dijkstra from every node in `starts`, in parallel.
///
/// The result is index-aligned with `starts`; unknown start nodes map to `None`.
pub fn shortest_paths_from_many<G, Q>(graph: &G, starts: &[NodeId]) -> Vec<Option<ShortestPaths>>
where
    G: WeightedGraph + Sync,
    Q: PriorityQueue<NodeId, Weight> + Default,
{
    starts
        .par_iter()
        .map(|&start| dijkstra::<G, Q>(graph, start))
        .collect()
}

/// Runs Dijkstra from every live node, in parallel.
pub fn all_pairs_shortest_paths<G, Q>(graph: &G) -> Vec<ShortestPaths>
where
    G: WeightedGraph + Sync,
    Q: PriorityQueue<NodeId, Weight> + Default,
{
    let starts: Vec<NodeId> = graph.node_ids().collect();
    shortest_paths_from_many::<G, Q>(graph, &starts)
        .into_iter()
        .flatten()
        .collect()
}
