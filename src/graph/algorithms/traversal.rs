//! Depth-first traversal.
//!
//! [`Dfs`] reproduces recursive pre-order exactly, using an explicit stack of
//! frames instead of the call stack. Each frame holds a node's partially
//! consumed neighbor iterator, so a neighbor is checked against `visited` at
//! the moment the recursive version would reach it, not when its parent is
//! first expanded. Depth is bounded by memory, not by thread stack size.

use crate::graph::{NodeId, WeightedGraph};

/// An iterator for Depth-First Search (DFS).
///
/// Yields node handles in pre-order starting from one node. A fresh iterator
/// must be created to traverse again.
pub struct Dfs<'a, G: WeightedGraph + 'a> {
    graph: &'a G,
    visited: Vec<bool>,
    stack: Vec<(NodeId, G::Neighbors<'a>)>,
    pending: Option<NodeId>,
}

impl<'a, G: WeightedGraph + 'a> Dfs<'a, G> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// An unknown `start` yields an empty traversal.
    pub fn new(graph: &'a G, start: NodeId) -> Self {
        let pending = graph.contains_node(start).then_some(start);
        Self {
            graph,
            visited: vec![false; graph.node_bound()],
            stack: Vec::new(),
            pending,
        }
    }

    /// Returns true if `node` has already been yielded.
    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited.get(node.index()).copied().unwrap_or(false)
    }

    fn enter(&mut self, node: NodeId) -> NodeId {
        self.visited[node.index()] = true;
        self.stack.push((node, self.graph.neighbors(node)));
        node
    }
}

impl<'a, G: WeightedGraph + 'a> Iterator for Dfs<'a, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if let Some(start) = self.pending.take() {
            return Some(self.enter(start));
        }

        loop {
            let (_, neighbors) = self.stack.last_mut()?;
            match neighbors.next() {
                Some((next, _)) if !self.visited[next.index()] => {
                    return Some(self.enter(next));
                }
                Some(_) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Collects the DFS pre-order from `start`.
///
/// Returns an empty vector when `start` is not a live node.
///
/// # Example
///
/// ```rust
/// use trellis::algorithms::depth_first;
/// use trellis::{AdjListGraph, GraphMut};
///
/// let mut graph = AdjListGraph::<u8>::new();
/// let (a, b) = graph.add_edge_by_value(0, 1, 1);
/// let (_, c) = graph.add_edge_by_value(0, 2, 1);
///
/// assert_eq!(depth_first(&graph, a), vec![a, b, c]);
/// ```
pub fn depth_first<G: WeightedGraph>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let order: Vec<NodeId> = Dfs::new(graph, start).collect();
    debug_event!(start = %start, visited = order.len(), "depth_first");
    order
}
