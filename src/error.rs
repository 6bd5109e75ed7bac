//! Error types for graph import and snapshot restoration.
//!
//! Graph mutation never fails: operations on absent nodes or edges are silent
//! no-ops. Only the boundary with external text and serialized data reports
//! errors, and it does so before any store is handed back.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a graph description into a store.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The source file could not be read.
    #[error("failed to read graph description {path}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The description has fewer than two lines (header and closing line).
    #[error("graph description is truncated: expected at least 2 lines, found {lines}")]
    Truncated {
        /// Number of lines found.
        lines: usize,
    },
    /// The first line does not open a `strict graph` block.
    #[error("graph description must start with `strict graph`, found `{found}`")]
    MissingHeader {
        /// The first line as read.
        found: String,
    },
    /// An edge statement could not be split into two endpoints.
    #[error("line {line}: malformed edge statement `{content}`")]
    MalformedEdge {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },
    /// An endpoint token could not be parsed as a node value.
    #[error("line {line}: invalid node `{token}`")]
    InvalidNode {
        /// 1-based line number.
        line: usize,
        /// The endpoint token.
        token: String,
    },
    /// The `weight=` attribute is missing its value or is not an integer.
    #[error("line {line}: invalid weight `{value}`")]
    InvalidWeight {
        /// 1-based line number.
        line: usize,
        /// The raw attribute value.
        value: String,
    },
}

/// Failure to rebuild a store from a [`GraphSnapshot`](crate::io::snapshot::GraphSnapshot).
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot was captured from a store of the other direction.
    #[error("snapshot is {found}, target store is {expected}")]
    DirectionMismatch {
        /// Direction of the target store.
        expected: &'static str,
        /// Direction recorded in the snapshot.
        found: &'static str,
    },
    /// An edge refers to a node index outside the snapshot's node list.
    #[error("edge {edge} references node index {index}, but only {nodes} nodes exist")]
    DanglingEdge {
        /// Position of the edge in the snapshot.
        edge: usize,
        /// Offending node index.
        index: usize,
        /// Number of nodes in the snapshot.
        nodes: usize,
    },
    /// Two snapshot entries hold equal values, which a registry cannot represent.
    #[error("node index {index} duplicates an earlier value")]
    DuplicateNode {
        /// Position of the duplicate.
        index: usize,
    },
    /// The JSON payload could not be decoded.
    #[error("invalid snapshot json")]
    Json(#[from] serde_json::Error),
}
