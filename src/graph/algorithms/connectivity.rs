//! Connected components of undirected graphs.

use crate::collections::{ActiveDisjointSet, BrandedDisjointSet};
use crate::graph::{NodeId, Undirected, WeightedGraph};
use crate::GhostToken;
use std::collections::HashMap;

/// Computes the connected components of the graph.
///
/// Components are listed in order of their first node, and nodes within a
/// component keep insertion order. Every live node belongs to exactly one
/// component; an isolated node forms its own.
///
/// This function uses `BrandedDisjointSet` internally, scoped to the call.
pub fn connected_components<G>(graph: &G) -> Vec<Vec<NodeId>>
where
    G: WeightedGraph<Direction = Undirected>,
{
    GhostToken::new(|mut ds_token| {
        let mut ds = BrandedDisjointSet::with_capacity(graph.node_bound());
        let mut active = ActiveDisjointSet::new(&mut ds, &mut ds_token);
        for _ in 0..graph.node_bound() {
            active.make_set();
        }

        for u in graph.node_ids() {
            for (v, _) in graph.neighbors(u) {
                active.union(u.index(), v.index());
            }
        }

        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        let mut components: Vec<Vec<NodeId>> = Vec::new();
        for u in graph.node_ids() {
            let root = active.find(u.index());
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(u);
        }
        debug_event!(components = components.len(), "connected_components");
        components
    })
}

/// Returns true if every live node is reachable from every other.
///
/// The empty graph counts as connected.
pub fn is_connected<G>(graph: &G) -> bool
where
    G: WeightedGraph<Direction = Undirected>,
{
    connected_components(graph).len() <= 1
}
