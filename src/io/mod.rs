//! Import and export at the boundary of the graph core.
//!
//! - `dot`: the simplified `strict graph` text format, both directions.
//! - `snapshot`: a serde-friendly node/edge listing for JSON hand-off.

pub mod dot;
pub mod snapshot;

pub use dot::{parse_edges, read_graph, read_graph_file, to_dot, EdgeRecord};
pub use snapshot::{GraphSnapshot, SnapshotEdge};
