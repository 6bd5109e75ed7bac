//! Single-source shortest paths (Dijkstra) over a pluggable priority queue.
//!
//! The queue is a relaxation log: a node is pushed every time its tentative
//! distance improves, and older entries for the same node stay queued. When an
//! entry is extracted whose distance is worse than the table's, it is stale and
//! skipped; otherwise its out-edges are relaxed from the extracted distance.
//!
//! Edge weights must be non-negative. Negative weights are not checked.

use crate::collections::{MinHeapQueue, PriorityQueue};
use crate::graph::{NodeId, Weight, WeightedGraph};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Shortest distance from the start node.
///
/// `Unreachable` orders after every finite distance, acting as +infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    /// Length of a shortest path.
    Finite(Weight),
    /// No path exists.
    Unreachable,
}

impl Distance {
    /// The finite length, if any.
    pub fn finite(self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }

    /// Returns true for [`Distance::Finite`].
    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Unreachable => f.write_str("inf"),
        }
    }
}

/// Distances from one start node to every node of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPaths {
    start: NodeId,
    distances: BTreeMap<NodeId, Distance>,
}

impl ShortestPaths {
    /// The node the distances are measured from.
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Distance to `node`, or `None` if it is not a node of the searched store.
    pub fn distance(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(&node).copied()
    }

    /// All `(node, distance)` pairs ordered by handle.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Distance)> + '_ {
        self.distances.iter().map(|(&node, &distance)| (node, distance))
    }

    /// Nodes with a finite distance, including the start.
    pub fn reachable(&self) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.iter()
            .filter_map(|(node, distance)| distance.finite().map(|d| (node, d)))
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if no node is covered.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// The underlying map.
    pub fn as_map(&self) -> &BTreeMap<NodeId, Distance> {
        &self.distances
    }
}

/// Runs Dijkstra from `start` with a fresh queue of type `Q`.
///
/// Returns `None` when `start` is not a live node of `graph`.
///
/// # Example
///
/// ```rust
/// use trellis::algorithms::{dijkstra, Distance};
/// use trellis::{AdjListGraph, GraphMut, UnsortedQueue};
///
/// let mut graph = AdjListGraph::<u32>::new();
/// let a = graph.add_node(0);
/// let b = graph.add_node(1);
/// let lonely = graph.add_node(2);
/// graph.add_edge(a, b, 4);
///
/// let paths = dijkstra::<_, UnsortedQueue<_, _>>(&graph, a).unwrap();
/// assert_eq!(paths.distance(b), Some(Distance::Finite(4)));
/// assert_eq!(paths.distance(lonely), Some(Distance::Unreachable));
/// ```
pub fn dijkstra<G, Q>(graph: &G, start: NodeId) -> Option<ShortestPaths>
where
    G: WeightedGraph,
    Q: PriorityQueue<NodeId, Weight> + Default,
{
    dijkstra_with(graph, start, Q::default())
}

/// Runs Dijkstra from `start` using the binary-heap strategy.
pub fn shortest_paths<G: WeightedGraph>(graph: &G, start: NodeId) -> Option<ShortestPaths> {
    dijkstra::<G, MinHeapQueue<NodeId, Weight>>(graph, start)
}

/// Runs Dijkstra from `start`, driving the supplied `queue`.
///
/// The queue should be empty; any entries already present are treated as
/// candidates and relaxed like the rest.
pub fn dijkstra_with<G, Q>(graph: &G, start: NodeId, mut queue: Q) -> Option<ShortestPaths>
where
    G: WeightedGraph,
    Q: PriorityQueue<NodeId, Weight>,
{
    if !graph.contains_node(start) {
        return None;
    }
    debug_event!(start = %start, nodes = graph.node_count(), "dijkstra");

    let mut table = vec![Distance::Unreachable; graph.node_bound()];
    table[start.index()] = Distance::Finite(0);
    queue.insert(start, 0);

    while let Some((node, current)) = queue.extract_min() {
        if Distance::Finite(current) > table[node.index()] {
            continue;
        }
        for (neighbor, weight) in graph.neighbors(node) {
            let candidate = current.saturating_add(weight);
            if Distance::Finite(candidate) < table[neighbor.index()] {
                trace_event!(from = %node, to = %neighbor, candidate, "relax");
                table[neighbor.index()] = Distance::Finite(candidate);
                queue.insert(neighbor, candidate);
            }
        }
    }

    let distances = graph
        .node_ids()
        .map(|id| (id, table[id.index()]))
        .collect();
    Some(ShortestPaths { start, distances })
}
