//! The simplified `strict graph` text format.
//!
//! ```text
//! strict graph {
//! a -- b;
//! b -- c [weight=4];
//! }
//! ```
//!
//! The first line must start with `strict graph`. Each body line containing
//! `--` is one undirected edge; `[weight=W]` sets an integer weight, otherwise
//! the weight is [`DEFAULT_WEIGHT`]. Blank lines, the closing `}` and lines
//! without `--` (node or attribute statements) are skipped.
//!
//! Parsing is all-or-nothing: on any error no edge is returned, so a store is
//! either fully built or not built at all.

use crate::error::ImportError;
use crate::graph::{
    AdjListGraph, AdjMatrixGraph, EdgeType, GraphMut, Undirected, Weight, WeightedGraph,
    DEFAULT_WEIGHT,
};
use std::fmt::{Display, Write as _};
use std::fs;
use std::hash::Hash;
use std::path::Path;
use std::str::FromStr;

/// Header every description must start with.
pub const HEADER: &str = "strict graph";

/// One parsed edge statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord<V> {
    /// Left endpoint.
    pub source: V,
    /// Right endpoint.
    pub target: V,
    /// Edge weight.
    pub weight: Weight,
}

impl<V> EdgeRecord<V> {
    /// Splits the record into a `(source, target, weight)` triple.
    pub fn into_triple(self) -> (V, V, Weight) {
        (self.source, self.target, self.weight)
    }
}

/// Parses a description into edge records.
///
/// Endpoint tokens are converted with `V::from_str`, so the same text can
/// produce `String` nodes or numeric nodes.
///
/// # Errors
///
/// See [`ImportError`] for the rejected shapes.
pub fn parse_edges<V: FromStr>(text: &str) -> Result<Vec<EdgeRecord<V>>, ImportError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 2 {
        return Err(ImportError::Truncated { lines: lines.len() });
    }
    if !lines[0].trim_start().starts_with(HEADER) {
        return Err(ImportError::MissingHeader {
            found: lines[0].trim().to_string(),
        });
    }

    let mut records = Vec::new();
    for (idx, raw) in lines.iter().enumerate().skip(1) {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('}') || !line.contains("--") {
            continue;
        }
        records.push(parse_edge_line(idx + 1, line)?);
    }
    Ok(records)
}

fn parse_edge_line<V: FromStr>(line_no: usize, line: &str) -> Result<EdgeRecord<V>, ImportError> {
    let malformed = || ImportError::MalformedEdge {
        line: line_no,
        content: line.to_string(),
    };

    let statement = line.trim_end_matches(';').trim_end();
    let (body, weight) = match statement.split_once('[') {
        Some((body, attrs)) => {
            let attrs = attrs.strip_suffix(']').ok_or_else(malformed)?;
            (body, parse_weight(line_no, attrs)?)
        }
        None => (statement, DEFAULT_WEIGHT),
    };

    let mut parts = body.split("--");
    let (Some(lhs), Some(rhs), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    Ok(EdgeRecord {
        source: parse_endpoint(line_no, lhs)?,
        target: parse_endpoint(line_no, rhs)?,
        weight,
    })
}

fn parse_endpoint<V: FromStr>(line_no: usize, token: &str) -> Result<V, ImportError> {
    let token = token.trim();
    let invalid = || ImportError::InvalidNode {
        line: line_no,
        token: token.to_string(),
    };
    if token.is_empty() {
        return Err(invalid());
    }
    token.parse().map_err(|_| invalid())
}

/// Reads `weight=W` from a comma-separated attribute list. Other attributes are
/// ignored; a list without `weight` keeps the default.
fn parse_weight(line_no: usize, attrs: &str) -> Result<Weight, ImportError> {
    for attr in attrs.split(',') {
        let Some((key, value)) = attr.split_once('=') else {
            continue;
        };
        if key.trim() == "weight" {
            let value = value.trim().trim_matches('"');
            return value.parse().map_err(|_| ImportError::InvalidWeight {
                line: line_no,
                value: value.to_string(),
            });
        }
    }
    Ok(DEFAULT_WEIGHT)
}

/// Builds any store from a description.
///
/// # Errors
///
/// Propagates [`parse_edges`] errors; no store is returned on failure.
pub fn read_graph<G>(text: &str) -> Result<G, ImportError>
where
    G: GraphMut + Default,
    G::Value: FromStr,
{
    let records = parse_edges::<G::Value>(text)?;
    debug_event!(edges = records.len(), "imported graph description");
    Ok(G::from_edges(records.into_iter().map(EdgeRecord::into_triple)))
}

/// Builds any store from a description file.
///
/// # Errors
///
/// [`ImportError::Io`] if the file cannot be read, otherwise as [`read_graph`].
pub fn read_graph_file<G, P>(path: P) -> Result<G, ImportError>
where
    G: GraphMut + Default,
    G::Value: FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_graph(&text)
}

/// Writes an undirected store in the same format.
///
/// Edges of weight [`DEFAULT_WEIGHT`] are written without an attribute. Nodes
/// with no edges are written as bare statements, which the importer skips.
///
/// Reading the output back reproduces every edge and every node that has an
/// edge. Isolated nodes do not survive the round trip; use
/// [`GraphSnapshot`](crate::io::GraphSnapshot) when they must.
pub fn to_dot<G>(graph: &G) -> String
where
    G: WeightedGraph<Direction = Undirected>,
    G::Value: Display,
{
    let mut out = String::from(HEADER);
    out.push_str(" {\n");

    for id in graph.node_ids() {
        if graph.neighbors(id).next().is_none() {
            if let Some(value) = graph.node(id) {
                let _ = writeln!(out, "{value};");
            }
        }
    }
    for (u, v, weight) in graph.edges() {
        let (Some(a), Some(b)) = (graph.node(u), graph.node(v)) else {
            continue;
        };
        if weight == DEFAULT_WEIGHT {
            let _ = writeln!(out, "{a} -- {b};");
        } else {
            let _ = writeln!(out, "{a} -- {b} [weight={weight}];");
        }
    }

    out.push_str("}\n");
    out
}

impl<V, Ty> AdjListGraph<V, Ty>
where
    V: Eq + Hash + Clone + FromStr,
    Ty: EdgeType,
{
    /// Builds an adjacency-list store from a description.
    ///
    /// # Errors
    ///
    /// See [`read_graph`].
    pub fn from_dot_str(text: &str) -> Result<Self, ImportError> {
        read_graph(text)
    }

    /// Builds an adjacency-list store from a description file.
    ///
    /// # Errors
    ///
    /// See [`read_graph_file`].
    pub fn from_dot_file<P: AsRef<Path>>(path: P) -> Result<Self, ImportError> {
        read_graph_file(path)
    }
}

impl<V, Ty> AdjMatrixGraph<V, Ty>
where
    V: Eq + Hash + Clone + FromStr,
    Ty: EdgeType,
{
    /// Builds an adjacency-matrix store from a description.
    ///
    /// # Errors
    ///
    /// See [`read_graph`].
    pub fn from_dot_str(text: &str) -> Result<Self, ImportError> {
        read_graph(text)
    }

    /// Builds an adjacency-matrix store from a description file.
    ///
    /// # Errors
    ///
    /// See [`read_graph_file`].
    pub fn from_dot_file<P: AsRef<Path>>(path: P) -> Result<Self, ImportError> {
        read_graph_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "strict graph {\n1 -- 2;\n2 -- 3 [weight=7];\n\n}\n";

    #[test]
    fn test_parse_weighted_and_default_edges() {
        let records = parse_edges::<u32>(SAMPLE).unwrap();
        assert_eq!(
            records,
            vec![
                EdgeRecord { source: 1, target: 2, weight: 1 },
                EdgeRecord { source: 2, target: 3, weight: 7 },
            ]
        );
    }

    #[test]
    fn test_text_tokens_keep_their_spelling() {
        let records = parse_edges::<String>("strict graph G {\n  alpha -- beta;\n}").unwrap();
        assert_eq!(records[0].source, "alpha");
        assert_eq!(records[0].target, "beta");
    }

    #[test]
    fn test_missing_header_is_rejected() {
        let err = parse_edges::<String>("graph {\na -- b;\n}").unwrap_err();
        assert!(matches!(err, ImportError::MissingHeader { .. }));
    }

    #[test]
    fn test_truncated_input_is_rejected() {
        assert!(matches!(
            parse_edges::<String>("strict graph {"),
            Err(ImportError::Truncated { lines: 1 })
        ));
        assert!(matches!(
            parse_edges::<String>(""),
            Err(ImportError::Truncated { lines: 0 })
        ));
    }

    #[test]
    fn test_bad_weight_reports_line() {
        let err = parse_edges::<String>("strict graph {\na -- b;\nb -- c [weight=x];\n}").unwrap_err();
        match err {
            ImportError::InvalidWeight { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_chained_edges_are_malformed() {
        let err = parse_edges::<String>("strict graph {\na -- b -- c;\n}").unwrap_err();
        assert!(matches!(err, ImportError::MalformedEdge { line: 2, .. }));
    }

    #[test]
    fn test_non_numeric_token_for_numeric_nodes() {
        let err = parse_edges::<i32>("strict graph {\na -- 2;\n}").unwrap_err();
        assert!(matches!(err, ImportError::InvalidNode { line: 2, .. }));
    }

    #[test]
    fn test_export_drops_isolated_nodes_on_reimport() {
        let mut graph = AdjListGraph::<u32>::from_edges([(1, 2, 3), (2, 3, 1)]);
        graph.add_node(9);

        let text = to_dot(&graph);
        assert!(text.contains("9;\n"));

        let again = AdjListGraph::<u32>::from_dot_str(&text).unwrap();
        assert_eq!(again.edges().len(), 2);
        assert_eq!(again.total_weight(), 4);
        assert_eq!(again.node_count(), 3);
        assert_eq!(again.find_node(&9), None);
    }

    #[test]
    fn test_export_round_trips() {
        let graph = AdjListGraph::<String>::from_dot_str(SAMPLE).unwrap();
        let text = to_dot(&graph);
        assert!(text.starts_with("strict graph {\n"));
        assert!(text.contains("1 -- 2;\n"));
        assert!(text.contains("2 -- 3 [weight=7];\n"));

        let again = AdjListGraph::<String>::from_dot_str(&text).unwrap();
        assert_eq!(again.edge_count(), graph.edge_count());
        assert_eq!(again.total_weight(), graph.total_weight());
    }
}
