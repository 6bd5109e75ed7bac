//! Minimum spanning tree (Kruskal).
//!
//! Every stored edge is collected from every adjacency list, so each undirected
//! edge appears once per endpoint. The list is sorted by weight with a stable
//! sort, then scanned once: an edge joining two different components is kept
//! and the components are united; the mirrored copy of an accepted edge then
//! joins nodes already in one component and is skipped.
//!
//! The union-find table is branded to a [`GhostToken`] scope opened for the call.

use crate::collections::BrandedDisjointSet;
use crate::graph::{AdjListGraph, GraphMut, NodeId, Undirected, Weight, WeightedGraph};
use crate::GhostToken;

/// Computes a minimum spanning forest of `graph`.
///
/// The result is a new, independently owned store holding the nodes touched by
/// accepted edges and those edges. A connected input yields `|V| - 1` edges; a
/// disconnected one yields one tree per component with no edge between them.
/// Isolated nodes have no incident edge and do not appear in the result.
///
/// # Example
///
/// ```rust
/// use trellis::algorithms::minimum_spanning_tree;
/// use trellis::{AdjListGraph, GraphMut, WeightedGraph};
///
/// let mut graph = AdjListGraph::<&str>::new();
/// graph.add_edge_by_value("a", "b", 3);
/// graph.add_edge_by_value("b", "c", 1);
/// graph.add_edge_by_value("a", "c", 2);
///
/// let tree = minimum_spanning_tree(&graph);
/// assert_eq!(tree.edge_count(), 2);
/// assert_eq!(tree.total_weight(), 3);
/// ```
pub fn minimum_spanning_tree<G>(graph: &G) -> AdjListGraph<G::Value, Undirected>
where
    G: WeightedGraph<Direction = Undirected>,
{
    let edges = sorted_edges(graph);
    debug_event!(candidates = edges.len(), nodes = graph.node_count(), "kruskal");

    GhostToken::new(|mut token| {
        let mut components = BrandedDisjointSet::with_singletons(&mut token, graph.node_bound());
        let mut tree = AdjListGraph::new();

        for (weight, u, v) in edges {
            if !components.union(&mut token, u.index(), v.index()) {
                continue;
            }
            let (Some(a), Some(b)) = (graph.node(u), graph.node(v)) else {
                continue;
            };
            trace_event!(from = %u, to = %v, weight, "accept");
            tree.add_edge_by_value(a.clone(), b.clone(), weight);
        }

        tree
    })
}

/// All stored edges as `(weight, source, target)`, stably sorted by weight.
fn sorted_edges<G: WeightedGraph>(graph: &G) -> Vec<(Weight, NodeId, NodeId)> {
    let mut edges = Vec::new();
    for u in graph.node_ids() {
        for (v, weight) in graph.neighbors(u) {
            edges.push((weight, u, v));
        }
    }
    edges.sort_by_key(|&(weight, _, _)| weight);
    edges
}
