//! Adjacency Matrix Graph
//!
//! A square matrix of weights indexed by registry slot, with `0` meaning "no
//! edge" (the diagonal included). Adding a node appends a zero column to every
//! existing row and a new zero row. Removing a node zeroes its row and column;
//! the slot itself is retired together with the handle.
//!
//! Because `0` encodes absence, `add_edge(a, b, 0)` clears the cell.
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `add_node` | \(O(n)\) |
//! | `add_edge` / `remove_edge` / `edge_weight` | \(O(1)\) |
//! | `remove_node` | \(O(n)\) |
//! | `neighbors` | \(O(n)\) to drain |

use crate::graph::edge_type::{Directed, EdgeType, Undirected};
use crate::graph::node::{NodeId, NodeRegistry};
use crate::graph::traits::{GraphMut, WeightedGraph};
use crate::graph::Weight;
use std::hash::Hash;
use std::marker::PhantomData;

/// Weighted graph stored as a dense weight matrix.
///
/// Retired slots are never reclaimed: every `add_node` of a new value grows the
/// matrix by one row and column, even after removals, so memory is quadratic in
/// the number of nodes ever added rather than the number currently live.
#[derive(Debug, Clone)]
pub struct AdjMatrixGraph<V, Ty = Undirected> {
    nodes: NodeRegistry<V>,
    /// `matrix[row][col]` is the weight of `row -> col`, or 0.
    matrix: Vec<Vec<Weight>>,
    _ty: PhantomData<Ty>,
}

/// Directed adjacency-matrix graph.
pub type DiAdjMatrixGraph<V> = AdjMatrixGraph<V, Directed>;

impl<V, Ty> AdjMatrixGraph<V, Ty> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: NodeRegistry::new(),
            matrix: Vec::new(),
            _ty: PhantomData,
        }
    }

    /// The row of `id`, one entry per slot. Unknown handles yield an empty row.
    pub fn row(&self, id: NodeId) -> &[Weight] {
        self.matrix.get(id.index()).map_or(&[], Vec::as_slice)
    }

    /// Raw cell value, `0` when absent or out of range.
    pub fn cell(&self, row: NodeId, col: NodeId) -> Weight {
        self.row(row).get(col.index()).copied().unwrap_or(0)
    }
}

impl<V: Eq + Hash + Clone, Ty: EdgeType> AdjMatrixGraph<V, Ty> {
    /// Looks up a live node by value.
    pub fn find_node<Q>(&self, value: &Q) -> Option<NodeId>
    where
        V: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.find(value)
    }

    /// Returns true if the weight matrix equals its transpose.
    ///
    /// Always holds for undirected stores.
    pub fn is_symmetric(&self) -> bool {
        let n = self.matrix.len();
        (0..n).all(|r| (0..r).all(|c| self.matrix[r][c] == self.matrix[c][r]))
    }
}

impl<V, Ty> Default for AdjMatrixGraph<V, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

/// Nonzero cells of one matrix row.
pub struct MatrixNeighbors<'a> {
    row: std::iter::Enumerate<std::slice::Iter<'a, Weight>>,
}

impl Iterator for MatrixNeighbors<'_> {
    type Item = (NodeId, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        self.row
            .by_ref()
            .find(|&(_, &weight)| weight != 0)
            .map(|(col, &weight)| (NodeId::new(col), weight))
    }
}

impl<V: Eq + Hash + Clone, Ty: EdgeType> WeightedGraph for AdjMatrixGraph<V, Ty> {
    type Value = V;
    type Direction = Ty;
    type Neighbors<'a>
        = MatrixNeighbors<'a>
    where
        Self: 'a;

    fn registry(&self) -> &NodeRegistry<V> {
        &self.nodes
    }

    fn neighbors(&self, id: NodeId) -> MatrixNeighbors<'_> {
        MatrixNeighbors {
            row: self.row(id).iter().enumerate(),
        }
    }

    fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<Weight> {
        match self.cell(a, b) {
            0 => None,
            weight => Some(weight),
        }
    }
}

impl<V: Eq + Hash + Clone, Ty: EdgeType> GraphMut for AdjMatrixGraph<V, Ty> {
    fn add_node(&mut self, value: V) -> NodeId {
        let (id, fresh) = self.nodes.insert(value);
        if fresh {
            for row in &mut self.matrix {
                row.push(0);
            }
            let width = self.matrix.len() + 1;
            self.matrix.push(vec![0; width]);
        }
        id
    }

    fn remove_node(&mut self, id: NodeId) -> Option<V> {
        let value = self.nodes.remove(id)?;
        let idx = id.index();
        self.matrix[idx].fill(0);
        for row in &mut self.matrix {
            row[idx] = 0;
        }
        Some(value)
    }

    fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> bool {
        if !self.nodes.contains(a) || !self.nodes.contains(b) {
            return false;
        }
        self.matrix[a.index()][b.index()] = weight;
        if !Ty::is_directed() {
            self.matrix[b.index()][a.index()] = weight;
        }
        true
    }

    fn remove_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        if !self.nodes.contains(a) || !self.nodes.contains(b) {
            return false;
        }
        let removed = self.matrix[a.index()][b.index()] != 0
            || (!Ty::is_directed() && self.matrix[b.index()][a.index()] != 0);
        self.matrix[a.index()][b.index()] = 0;
        if !Ty::is_directed() {
            self.matrix[b.index()][a.index()] = 0;
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_extends_every_row() {
        let mut graph = AdjMatrixGraph::<&str>::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");

        for id in [a, b, c] {
            assert_eq!(graph.row(id), &[0, 0, 0]);
        }
        assert_eq!(graph.add_node("b"), b);
        assert_eq!(graph.row(a).len(), 3);
    }

    #[test]
    fn test_matrix_stays_symmetric() {
        let mut graph = AdjMatrixGraph::<u32>::new();
        let a = graph.add_node(1);
        let b = graph.add_node(2);
        let c = graph.add_node(3);
        graph.add_edge(a, b, 4);
        graph.add_edge(c, a, 7);
        assert!(graph.is_symmetric());
        assert_eq!(graph.edge_weight(b, a), Some(4));

        graph.remove_edge(b, a);
        assert!(graph.is_symmetric());
        assert_eq!(graph.cell(a, b), 0);
        assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), vec![(c, 7)]);
    }

    #[test]
    fn test_directed_matrix_keeps_rows_only() {
        let mut graph = DiAdjMatrixGraph::<u32>::new();
        let a = graph.add_node(1);
        let b = graph.add_node(2);
        graph.add_edge(a, b, 2);

        assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), vec![(b, 2)]);
        assert_eq!(graph.neighbors(b).count(), 0);
        assert!(!graph.is_symmetric());
    }

    #[test]
    fn test_retired_slots_keep_matrix_growing() {
        let mut graph = AdjMatrixGraph::<u32>::new();
        for round in 0..3 {
            let id = graph.add_node(round);
            graph.remove_node(id);
        }
        let live = graph.add_node(7);

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.node_bound(), 4);
        assert_eq!(graph.row(live).len(), 4);
    }

    #[test]
    fn test_remove_node_clears_row_and_column() {
        let mut graph = AdjMatrixGraph::<u32>::new();
        let a = graph.add_node(1);
        let b = graph.add_node(2);
        let c = graph.add_node(3);
        graph.add_edge(a, b, 1);
        graph.add_edge(b, c, 1);

        assert_eq!(graph.remove_node(b), Some(2));
        assert_eq!(graph.remove_node(b), None);
        assert_eq!(graph.neighbors(a).count(), 0);
        assert_eq!(graph.neighbors(c).count(), 0);
        assert!(!graph.add_edge(a, b, 1));
        assert_eq!(graph.node_count(), 2);
    }
}
