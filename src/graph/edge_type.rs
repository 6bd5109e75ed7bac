//! Direction markers for graph stores.

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;

    /// Human-readable name used in diagnostics.
    fn name() -> &'static str {
        if Self::is_directed() {
            "directed"
        } else {
            "undirected"
        }
    }
}

/// Marker for directed graphs: `add_edge(a, b, w)` stores only `a -> b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

/// Marker for undirected graphs: `add_edge(a, b, w)` stores both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}
