//! Proptest strategies shared by the property tests.
//!
//! Node values are small integers so that generated edge lists revisit nodes
//! often and produce cycles and shared endpoints.

use proptest::prelude::*;
use trellis::{GraphMut, Weight};

/// Edge triples over node values `0..nodes` with weights `0..=max_weight`.
///
/// Self-loops and zero weights are both possible.
pub fn arb_edge_list(
    nodes: u16,
    max_weight: Weight,
    max_edges: usize,
) -> impl Strategy<Value = Vec<(u16, u16, Weight)>> {
    let nodes = nodes.max(1);
    proptest::collection::vec((0..nodes, 0..nodes, 0..=max_weight), 0..=max_edges)
}

/// Edge triples with no self-loops and strictly positive weights.
pub fn arb_positive_edge_list(
    nodes: u16,
    max_weight: Weight,
    max_edges: usize,
) -> impl Strategy<Value = Vec<(u16, u16, Weight)>> {
    let nodes = nodes.max(2);
    let max_weight = max_weight.max(1);
    proptest::collection::vec(
        (0..nodes, 0..nodes, 1..=max_weight).prop_filter("self-loop", |(a, b, _)| a != b),
        0..=max_edges,
    )
}

/// A store of type `G` built from a generated positive edge list.
pub fn arb_graph<G>(nodes: u16, max_weight: Weight, max_edges: usize) -> impl Strategy<Value = G>
where
    G: GraphMut<Value = u16> + Default + std::fmt::Debug,
{
    arb_positive_edge_list(nodes, max_weight, max_edges).prop_map(|edges| G::from_edges(edges))
}
