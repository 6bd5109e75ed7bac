//! The read and write seams shared by every graph store.

use super::edge_type::EdgeType;
use super::node::{Ids, Iter, NodeId, NodeRegistry};
use super::{Weight, DEFAULT_WEIGHT};
use std::hash::Hash;

/// Read-only view of a weighted graph.
///
/// Every algorithm in [`algorithms`](crate::algorithms) consumes this trait, so
/// it runs unchanged over both the adjacency-list and adjacency-matrix stores.
pub trait WeightedGraph {
    /// Value carried by each node; equal values denote the same node.
    type Value: Eq + Hash + Clone;
    /// Whether `add_edge` mirrors edges.
    type Direction: EdgeType;
    /// Iterator over `(neighbor, weight)` out-edges of one node.
    type Neighbors<'a>: Iterator<Item = (NodeId, Weight)>
    where
        Self: 'a;

    /// The registry holding node identity.
    fn registry(&self) -> &NodeRegistry<Self::Value>;

    /// Out-edges of `id`, in storage order. Unknown handles yield nothing.
    fn neighbors(&self, id: NodeId) -> Self::Neighbors<'_>;

    /// Returns true for directed stores.
    fn is_directed(&self) -> bool {
        <Self::Direction as EdgeType>::is_directed()
    }

    /// Number of live nodes.
    fn node_count(&self) -> usize {
        self.registry().len()
    }

    /// Size for dense per-node tables indexed by [`NodeId::index`].
    fn node_bound(&self) -> usize {
        self.registry().bound()
    }

    /// Returns true if `id` is a live node of this store.
    fn contains_node(&self, id: NodeId) -> bool {
        self.registry().contains(id)
    }

    /// Value of a live node.
    fn node(&self, id: NodeId) -> Option<&Self::Value> {
        self.registry().get(id)
    }

    /// Live node handles in insertion order.
    fn node_ids(&self) -> Ids<'_, Self::Value> {
        self.registry().ids()
    }

    /// Live `(handle, value)` pairs in insertion order.
    fn nodes(&self) -> Iter<'_, Self::Value> {
        self.registry().iter()
    }

    /// Weight of the first stored edge `a -> b`.
    fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<Weight> {
        self.neighbors(a)
            .find(|&(neighbor, _)| neighbor == b)
            .map(|(_, weight)| weight)
    }

    /// Returns true if an edge `a -> b` is stored.
    fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Every edge as `(source, target, weight)`.
    ///
    /// Undirected edges are reported once, from the endpoint with the smaller
    /// handle.
    fn edges(&self) -> Vec<(NodeId, NodeId, Weight)> {
        let directed = self.is_directed();
        let mut out = Vec::new();
        for u in self.node_ids() {
            for (v, weight) in self.neighbors(u) {
                if directed || u <= v {
                    out.push((u, v, weight));
                }
            }
        }
        out
    }

    /// Number of edges as reported by [`edges`](Self::edges).
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Sum of all edge weights as reported by [`edges`](Self::edges).
    fn total_weight(&self) -> Weight {
        self.edges().iter().map(|&(_, _, weight)| weight).sum()
    }
}

/// Mutation operations shared by the stores.
///
/// Operations that name an absent node or edge are silent no-ops; the return
/// values only report whether anything changed.
pub trait GraphMut: WeightedGraph {
    /// Adds a node, or returns the handle of the node with an equal value.
    fn add_node(&mut self, value: Self::Value) -> NodeId;

    /// Removes a node and every edge touching it. Returns its value.
    fn remove_node(&mut self, id: NodeId) -> Option<Self::Value>;

    /// Adds an edge between two live nodes. Returns `false` if either is absent.
    fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> bool;

    /// Removes every edge between `a` and `b`. Returns `true` if any existed.
    fn remove_edge(&mut self, a: NodeId, b: NodeId) -> bool;

    /// Adds an edge with [`DEFAULT_WEIGHT`].
    fn add_unweighted_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        self.add_edge(a, b, DEFAULT_WEIGHT)
    }

    /// Looks up (or creates) both endpoints by value and connects them.
    fn add_edge_by_value(
        &mut self,
        a: Self::Value,
        b: Self::Value,
        weight: Weight,
    ) -> (NodeId, NodeId) {
        let a = self.add_node(a);
        let b = self.add_node(b);
        self.add_edge(a, b, weight);
        (a, b)
    }

    /// Builds a store from `(value, value, weight)` triples.
    fn from_edges<I>(edges: I) -> Self
    where
        Self: Default,
        I: IntoIterator<Item = (Self::Value, Self::Value, Weight)>,
    {
        let mut graph = Self::default();
        for (a, b, weight) in edges {
            graph.add_edge_by_value(a, b, weight);
        }
        graph
    }
}
