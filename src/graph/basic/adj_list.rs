//! Adjacency List Graph
//!
//! Each live node owns an ordered `Vec` of `(neighbor, weight)` out-edges. The
//! per-node lists are stored in a dense `Vec` parallel to the registry slots,
//! so a traversal indexes straight into contiguous storage by [`NodeId`].
//!
//! For [`Undirected`] stores `add_edge(a, b, w)` appends `(b, w)` to `a` and
//! `(a, w)` to `b`; a self-loop is stored once. For [`Directed`] stores only
//! `(b, w)` is appended to `a`.
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `add_node` | \(O(1)\) expected |
//! | `add_edge` | \(O(1)\) amortized |
//! | `remove_edge` | \(O(\deg a + \deg b)\) |
//! | `remove_node` | \(O(n + m)\) |
//! | `neighbors` | \(O(1)\) to start, \(O(\deg)\) to drain |

use crate::graph::edge_type::{Directed, EdgeType, Undirected};
use crate::graph::node::{NodeId, NodeRegistry};
use crate::graph::traits::{GraphMut, WeightedGraph};
use crate::graph::Weight;
use std::hash::Hash;
use std::marker::PhantomData;

/// Weighted graph stored as per-node edge lists.
#[derive(Debug, Clone)]
pub struct AdjListGraph<V, Ty = Undirected> {
    nodes: NodeRegistry<V>,
    /// Out-edges per registry slot. Vacant slots hold an empty list.
    adjacency: Vec<Vec<(NodeId, Weight)>>,
    _ty: PhantomData<Ty>,
}

/// Directed adjacency-list graph.
pub type DiAdjListGraph<V> = AdjListGraph<V, Directed>;

impl<V, Ty> AdjListGraph<V, Ty> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: NodeRegistry::new(),
            adjacency: Vec::new(),
            _ty: PhantomData,
        }
    }

    /// Creates an empty graph with room for `nodes` node slots.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: NodeRegistry::new(),
            adjacency: Vec::with_capacity(nodes),
            _ty: PhantomData,
        }
    }

    /// Out-edges of `id` as a slice. Unknown handles yield an empty slice.
    pub fn edge_list(&self, id: NodeId) -> &[(NodeId, Weight)] {
        self.adjacency.get(id.index()).map_or(&[], Vec::as_slice)
    }
}

impl<V: Eq + Hash + Clone, Ty: EdgeType> AdjListGraph<V, Ty> {
    /// Looks up a live node by value.
    pub fn find_node<Q>(&self, value: &Q) -> Option<NodeId>
    where
        V: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.find(value)
    }
}

impl<V, Ty> Default for AdjListGraph<V, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash + Clone, Ty: EdgeType> WeightedGraph for AdjListGraph<V, Ty> {
    type Value = V;
    type Direction = Ty;
    type Neighbors<'a>
        = std::iter::Copied<std::slice::Iter<'a, (NodeId, Weight)>>
    where
        Self: 'a;

    fn registry(&self) -> &NodeRegistry<V> {
        &self.nodes
    }

    fn neighbors(&self, id: NodeId) -> Self::Neighbors<'_> {
        self.edge_list(id).iter().copied()
    }
}

impl<V: Eq + Hash + Clone, Ty: EdgeType> GraphMut for AdjListGraph<V, Ty> {
    fn add_node(&mut self, value: V) -> NodeId {
        let (id, fresh) = self.nodes.insert(value);
        if fresh {
            debug_assert_eq!(id.index(), self.adjacency.len());
            self.adjacency.push(Vec::new());
        }
        id
    }

    fn remove_node(&mut self, id: NodeId) -> Option<V> {
        let value = self.nodes.remove(id)?;
        self.adjacency[id.index()] = Vec::new();
        for edges in &mut self.adjacency {
            edges.retain(|&(neighbor, _)| neighbor != id);
        }
        Some(value)
    }

    fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> bool {
        if !self.nodes.contains(a) || !self.nodes.contains(b) {
            return false;
        }
        self.adjacency[a.index()].push((b, weight));
        if !Ty::is_directed() && a != b {
            self.adjacency[b.index()].push((a, weight));
        }
        true
    }

    fn remove_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        if !self.nodes.contains(a) || !self.nodes.contains(b) {
            return false;
        }
        let before = self.adjacency[a.index()].len();
        self.adjacency[a.index()].retain(|&(neighbor, _)| neighbor != b);
        let mut removed = self.adjacency[a.index()].len() != before;
        if !Ty::is_directed() {
            let before = self.adjacency[b.index()].len();
            self.adjacency[b.index()].retain(|&(neighbor, _)| neighbor != a);
            removed |= self.adjacency[b.index()].len() != before;
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = AdjListGraph::<&str>::new();
        let a = graph.add_node("a");
        let again = graph.add_node("a");

        assert_eq!(a, again);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.find_node("a"), Some(a));
    }

    #[test]
    fn test_undirected_edge_is_mirrored() {
        let mut graph = AdjListGraph::<u32>::new();
        let a = graph.add_node(1);
        let b = graph.add_node(2);
        assert!(graph.add_edge(a, b, 5));

        assert_eq!(graph.edge_list(a), &[(b, 5)]);
        assert_eq!(graph.edge_list(b), &[(a, 5)]);
        assert_eq!(graph.edge_count(), 1);

        assert!(graph.remove_edge(a, b));
        assert!(graph.edge_list(a).is_empty());
        assert!(graph.edge_list(b).is_empty());
        assert!(!graph.remove_edge(a, b));
    }

    #[test]
    fn test_directed_edge_is_one_way() {
        let mut graph = DiAdjListGraph::<u32>::new();
        let a = graph.add_node(1);
        let b = graph.add_node(2);
        graph.add_edge(a, b, 3);

        assert!(graph.has_edge(a, b));
        assert!(!graph.has_edge(b, a));
        assert!(!graph.remove_edge(b, a));
        assert!(graph.remove_edge(a, b));
    }

    #[test]
    fn test_edges_to_absent_nodes_are_ignored() {
        let mut graph = AdjListGraph::<u32>::new();
        let a = graph.add_node(1);
        let b = graph.add_node(2);
        graph.remove_node(b);

        assert!(!graph.add_edge(a, b, 1));
        assert!(!graph.add_edge(a, NodeId::new(99), 1));
        assert!(graph.edge_list(a).is_empty());
    }

    #[test]
    fn test_remove_node_strips_incident_edges() {
        let mut graph = AdjListGraph::<char>::new();
        let a = graph.add_node('a');
        let b = graph.add_node('b');
        let c = graph.add_node('c');
        graph.add_edge(a, b, 1);
        graph.add_edge(b, c, 2);
        graph.add_edge(c, a, 3);

        assert_eq!(graph.remove_node(b), Some('b'));
        assert_eq!(graph.remove_node(b), None);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_list(a), &[(c, 3)]);
        assert_eq!(graph.edge_list(c), &[(a, 3)]);
        assert!(graph.edge_list(b).is_empty());
    }

    #[test]
    fn test_self_loop_stored_once() {
        let mut graph = AdjListGraph::<u8>::new();
        let a = graph.add_node(0);
        graph.add_edge(a, a, 4);
        assert_eq!(graph.edge_list(a), &[(a, 4)]);
        assert_eq!(graph.total_weight(), 4);
    }
}
