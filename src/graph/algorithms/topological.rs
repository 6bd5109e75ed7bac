//! Cycle detection and topological ordering for directed graphs.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `is_dag` | \(O(n + m)\) | Three-state DFS, stops at the first back edge |
//! | `toposort` | \(O(n + m)\) | `is_dag` gate, then Kahn's algorithm |
//!
//! In-degrees are counted into a table built fresh for each `toposort` call, so
//! the store is never modified and repeated calls return the same order.

use crate::graph::{Directed, NodeId, WeightedGraph};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    /// On the active DFS path.
    InProgress,
    Done,
}

/// Returns true if the directed graph has no cycle.
///
/// Runs a DFS from every unvisited node in insertion order. Reaching a node
/// that is still on the active path is a back edge; detection stops there for
/// the whole graph. A self-loop is a cycle.
pub fn is_dag<G>(graph: &G) -> bool
where
    G: WeightedGraph<Direction = Directed>,
{
    let mut marks = vec![Mark::Unvisited; graph.node_bound()];
    let mut stack: Vec<(NodeId, G::Neighbors<'_>)> = Vec::new();

    for root in graph.node_ids() {
        if marks[root.index()] != Mark::Unvisited {
            continue;
        }
        marks[root.index()] = Mark::InProgress;
        stack.push((root, graph.neighbors(root)));

        while let Some((node, neighbors)) = stack.last_mut() {
            let node = *node;
            match neighbors.next() {
                Some((next, _)) => match marks[next.index()] {
                    Mark::InProgress => {
                        debug_event!(from = %node, to = %next, "back edge");
                        return false;
                    }
                    Mark::Unvisited => {
                        marks[next.index()] = Mark::InProgress;
                        stack.push((next, graph.neighbors(next)));
                    }
                    Mark::Done => {}
                },
                None => {
                    marks[node.index()] = Mark::Done;
                    stack.pop();
                }
            }
        }
    }
    true
}

/// Computes a topological order with Kahn's algorithm.
///
/// Returns `None` if the graph has a cycle; an empty graph yields `Some` of an
/// empty order. Sources are seeded in insertion order and the queue is FIFO,
/// so the result is deterministic for a given store.
///
/// # Example
///
/// ```rust
/// use trellis::algorithms::toposort;
/// use trellis::graph::basic::DiAdjListGraph;
/// use trellis::GraphMut;
///
/// let mut graph = DiAdjListGraph::<&str>::new();
/// let (shirt, tie) = graph.add_edge_by_value("shirt", "tie", 1);
/// let (_, jacket) = graph.add_edge_by_value("tie", "jacket", 1);
///
/// assert_eq!(toposort(&graph), Some(vec![shirt, tie, jacket]));
///
/// graph.add_edge(jacket, shirt, 1);
/// assert_eq!(toposort(&graph), None);
/// ```
pub fn toposort<G>(graph: &G) -> Option<Vec<NodeId>>
where
    G: WeightedGraph<Direction = Directed>,
{
    if !is_dag(graph) {
        return None;
    }

    let mut indegree = vec![0usize; graph.node_bound()];
    for u in graph.node_ids() {
        for (v, _) in graph.neighbors(u) {
            indegree[v.index()] += 1;
        }
    }

    let mut queue: VecDeque<NodeId> = graph
        .node_ids()
        .filter(|id| indegree[id.index()] == 0)
        .collect();

    let mut order = Vec::with_capacity(graph.node_count());
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for (v, _) in graph.neighbors(u) {
            indegree[v.index()] -= 1;
            if indegree[v.index()] == 0 {
                queue.push_back(v);
            }
        }
    }

    if order.len() == graph.node_count() {
        debug_event!(nodes = order.len(), "toposort");
        Some(order)
    } else {
        None
    }
}
