use std::io::Write;
use tempfile::NamedTempFile;
use trellis::algorithms::{shortest_paths, Distance};
use trellis::io::{to_dot, GraphSnapshot};
use trellis::{AdjListGraph, AdjMatrixGraph, ImportError, WeightedGraph};

const ROADS: &str = "strict graph roads {
  depot -- north [weight=4];
  depot -- south [weight=2];
  south -- north;
  north -- harbor [weight=6];
  harbor;
}
";

fn write_temp(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_both_stores_import_the_same_file() {
    let file = write_temp(ROADS);
    let list = AdjListGraph::<String>::from_dot_file(file.path()).unwrap();
    let matrix = AdjMatrixGraph::<String>::from_dot_file(file.path()).unwrap();

    for (nodes, edges, weight) in [
        (list.node_count(), list.edge_count(), list.total_weight()),
        (matrix.node_count(), matrix.edge_count(), matrix.total_weight()),
    ] {
        assert_eq!(nodes, 4);
        assert_eq!(edges, 4);
        assert_eq!(weight, 13);
    }

    let depot = list.find_node("depot").unwrap();
    let harbor = list.find_node("harbor").unwrap();
    let paths = shortest_paths(&list, depot).unwrap();
    assert_eq!(paths.distance(harbor), Some(Distance::Finite(9)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.dot");
    match AdjListGraph::<String>::from_dot_file(&path) {
        Err(ImportError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_malformed_input_builds_nothing() {
    let cases = [
        "",
        "strict graph {",
        "digraph {\na -> b;\n}",
        "strict graph {\na -- b;\nb -- c [weight=heavy];\n}",
        "strict graph {\na -- b -- c;\n}",
        "strict graph {\n -- b;\n}",
    ];
    for text in cases {
        assert!(
            AdjListGraph::<String>::from_dot_str(text).is_err(),
            "accepted {text:?}"
        );
        assert!(AdjMatrixGraph::<String>::from_dot_str(text).is_err());
    }
}

#[test]
fn test_numeric_nodes_reject_text_tokens() {
    let err = AdjListGraph::<u32>::from_dot_str("strict graph {\n1 -- 2;\n2 -- x;\n}").unwrap_err();
    assert!(matches!(err, ImportError::InvalidNode { line: 3, .. }));
}

#[test]
fn test_export_then_snapshot_round_trip() {
    let graph = AdjListGraph::<String>::from_dot_str(ROADS).unwrap();
    let reread = AdjMatrixGraph::<String>::from_dot_str(&to_dot(&graph)).unwrap();
    assert_eq!(reread.edge_count(), graph.edge_count());
    assert_eq!(reread.total_weight(), graph.total_weight());

    let json = GraphSnapshot::capture(&graph).to_json().unwrap();
    let restored: AdjListGraph<String> = GraphSnapshot::from_json(&json).unwrap().restore().unwrap();
    assert_eq!(restored.edges().len(), graph.edges().len());
    assert_eq!(
        GraphSnapshot::capture(&restored),
        GraphSnapshot::capture(&graph)
    );
}
