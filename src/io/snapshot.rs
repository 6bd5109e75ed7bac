//! Serializable graph snapshots.
//!
//! A [`GraphSnapshot`] lists node values in insertion order and edges as
//! positions into that list, so it survives a trip through JSON without
//! exposing store-specific [`NodeId`](crate::NodeId)s.

use crate::error::SnapshotError;
use crate::graph::{EdgeType, GraphMut, NodeId, Weight, WeightedGraph};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One edge of a snapshot, referring to nodes by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEdge {
    /// Position of the source in `nodes`.
    pub source: usize,
    /// Position of the target in `nodes`.
    pub target: usize,
    /// Edge weight.
    pub weight: Weight,
}

/// Store-independent listing of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot<V> {
    /// Whether the source store was directed.
    pub directed: bool,
    /// Node values in insertion order.
    pub nodes: Vec<V>,
    /// Edges as reported by [`WeightedGraph::edges`].
    pub edges: Vec<SnapshotEdge>,
}

impl<V: Clone> GraphSnapshot<V> {
    /// Captures the live nodes and edges of `graph`.
    pub fn capture<G>(graph: &G) -> Self
    where
        G: WeightedGraph<Value = V>,
    {
        let mut position: HashMap<NodeId, usize> = HashMap::with_capacity(graph.node_count());
        let mut nodes = Vec::with_capacity(graph.node_count());
        for (id, value) in graph.registry().iter() {
            position.insert(id, nodes.len());
            nodes.push(value.clone());
        }

        let edges = graph
            .edges()
            .into_iter()
            .map(|(u, v, weight)| SnapshotEdge {
                source: position[&u],
                target: position[&v],
                weight,
            })
            .collect();

        Self {
            directed: graph.is_directed(),
            nodes,
            edges,
        }
    }

    /// Rebuilds a store of type `G`.
    ///
    /// # Errors
    ///
    /// Fails if the direction differs from `G`'s, if an edge points outside
    /// `nodes`, or if two node values are equal.
    pub fn restore<G>(&self) -> Result<G, SnapshotError>
    where
        G: GraphMut<Value = V> + Default,
    {
        let expected = <G::Direction as EdgeType>::is_directed();
        if expected != self.directed {
            return Err(SnapshotError::DirectionMismatch {
                expected: <G::Direction as EdgeType>::name(),
                found: if self.directed { "directed" } else { "undirected" },
            });
        }

        let mut graph = G::default();
        let mut ids = Vec::with_capacity(self.nodes.len());
        for (index, value) in self.nodes.iter().enumerate() {
            let before = graph.node_count();
            ids.push(graph.add_node(value.clone()));
            if graph.node_count() == before {
                return Err(SnapshotError::DuplicateNode { index });
            }
        }

        for (edge, e) in self.edges.iter().enumerate() {
            for index in [e.source, e.target] {
                if index >= ids.len() {
                    return Err(SnapshotError::DanglingEdge {
                        edge,
                        index,
                        nodes: ids.len(),
                    });
                }
            }
            graph.add_edge(ids[e.source], ids[e.target], e.weight);
        }
        Ok(graph)
    }
}

impl<V: Serialize> GraphSnapshot<V> {
    /// Encodes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Fails only if a node value cannot be serialized.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<V: DeserializeOwned> GraphSnapshot<V> {
    /// Decodes a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// [`SnapshotError::Json`] on malformed input.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }
}
