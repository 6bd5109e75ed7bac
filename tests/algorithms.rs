use trellis::algorithms::{
    connected_components, depth_first, dijkstra, is_dag, minimum_spanning_tree, toposort,
    Distance,
};
use trellis::graph::basic::{DiAdjListGraph, DiAdjMatrixGraph};
use trellis::{
    AdjListGraph, AdjMatrixGraph, GraphMut, MinHeapQueue, NodeId, UnsortedQueue, WeightedGraph,
};

fn ring<G: GraphMut<Value = char> + Default>() -> G {
    G::from_edges([('A', 'B', 1), ('B', 'C', 2), ('C', 'D', 3), ('D', 'A', 4)])
}

fn distances_by_value<G: WeightedGraph<Value = char>>(
    graph: &G,
    start: char,
    heap: bool,
) -> Vec<(char, Distance)> {
    let start = graph.registry().find(&start).unwrap();
    let paths = if heap {
        dijkstra::<_, MinHeapQueue<_, _>>(graph, start)
    } else {
        dijkstra::<_, UnsortedQueue<_, _>>(graph, start)
    }
    .unwrap();
    paths
        .iter()
        .map(|(id, d)| (*graph.node(id).unwrap(), d))
        .collect()
}

#[test]
fn test_ring_distances_from_a() {
    let expected = vec![
        ('A', Distance::Finite(0)),
        ('B', Distance::Finite(1)),
        ('C', Distance::Finite(3)),
        ('D', Distance::Finite(4)),
    ];
    let list: AdjListGraph<char> = ring();
    let matrix: AdjMatrixGraph<char> = ring();

    for heap in [false, true] {
        assert_eq!(distances_by_value(&list, 'A', heap), expected);
        assert_eq!(distances_by_value(&matrix, 'A', heap), expected);
    }
}

#[test]
fn test_five_node_spanning_tree() {
    let edges = [
        ('A', 'B', 4),
        ('A', 'C', 2),
        ('A', 'D', 5),
        ('B', 'D', 6),
        ('B', 'E', 3),
        ('C', 'D', 1),
        ('D', 'E', 7),
    ];
    let list = AdjListGraph::<char>::from_edges(edges);
    let matrix = AdjMatrixGraph::<char>::from_edges(edges);

    for tree in [minimum_spanning_tree(&list), minimum_spanning_tree(&matrix)] {
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.edge_count(), 4);
        assert_eq!(tree.total_weight(), 10);
        assert_eq!(connected_components(&tree).len(), 1);

        let weight = |a: char, b: char| {
            let (a, b) = (tree.find_node(&a).unwrap(), tree.find_node(&b).unwrap());
            tree.edge_weight(a, b)
        };
        assert_eq!(weight('C', 'D'), Some(1));
        assert_eq!(weight('A', 'C'), Some(2));
        assert_eq!(weight('B', 'E'), Some(3));
        assert_eq!(weight('A', 'B'), Some(4));
        assert_eq!(weight('A', 'D'), None);
        assert_eq!(weight('D', 'E'), None);
    }
}

#[test]
fn test_spanning_forest_of_disconnected_input() {
    let graph = AdjListGraph::<u8>::from_edges([(0, 1, 2), (1, 2, 1), (0, 2, 5), (7, 8, 3)]);
    let forest = minimum_spanning_tree(&graph);

    assert_eq!(forest.edge_count(), 3);
    assert_eq!(forest.total_weight(), 6);
    assert_eq!(connected_components(&forest).len(), 2);
}

#[test]
fn test_depth_first_reaches_whole_component() {
    let mut graph = AdjListGraph::<u16>::new();
    for i in 0..50u16 {
        graph.add_edge_by_value(i, (i * 7 + 3) % 50, 1);
    }
    let lonely = graph.add_node(500);

    let components = connected_components(&graph);
    let start = NodeId::new(0);
    let home = components.iter().find(|c| c.contains(&start)).unwrap();

    let mut order = depth_first(&graph, start);
    assert_eq!(order[0], start);
    order.sort();
    let mut expected = home.clone();
    expected.sort();
    assert_eq!(order, expected);
    assert!(!order.contains(&lonely));
}

#[test]
fn test_cycle_detection_and_order() {
    let cyclic = DiAdjListGraph::<u8>::from_edges([(1, 2, 1), (2, 3, 1), (3, 1, 1)]);
    assert!(!is_dag(&cyclic));
    assert_eq!(toposort(&cyclic), None);

    let mut dag = DiAdjMatrixGraph::<char>::new();
    let a = dag.add_node('A');
    let b = dag.add_node('B');
    let c = dag.add_node('C');
    let d = dag.add_node('D');
    dag.add_edge(a, b, 1);
    dag.add_edge(a, c, 1);
    dag.add_edge(b, d, 1);
    dag.add_edge(c, d, 1);

    assert!(is_dag(&dag));
    let order = toposort(&dag).unwrap();
    let pos = |id: NodeId| order.iter().position(|&n| n == id).unwrap();
    for (u, v, _) in dag.edges() {
        assert!(pos(u) < pos(v));
    }
    assert_eq!(toposort(&dag), Some(order));
}

#[test]
fn test_removed_node_drops_out_of_results() {
    let mut graph = AdjListGraph::<char>::from_edges([('A', 'B', 1), ('B', 'C', 1), ('A', 'C', 5)]);
    let a = graph.find_node(&'A').unwrap();
    let b = graph.find_node(&'B').unwrap();
    let c = graph.find_node(&'C').unwrap();

    graph.remove_node(b);
    let paths = dijkstra::<_, MinHeapQueue<_, _>>(&graph, a).unwrap();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths.distance(b), None);
    assert_eq!(paths.distance(c), Some(Distance::Finite(5)));
    assert_eq!(depth_first(&graph, a), vec![a, c]);
}
