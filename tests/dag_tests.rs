use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shortest_paths::algorithm::dag::DagShortestPath;
use shortest_paths::algorithm::dijkstra::Dijkstra;
use shortest_paths::algorithm::traits::ShortestPathAlgorithm;
use shortest_paths::graph::generators::random_dag;
use shortest_paths::graph::DirectedGraph;
use shortest_paths::Error;

// Test helper building the 7-node reference DAG (node 6 is isolated)
fn reference_dag() -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::new(7);
    let edges = [
        (0, 1, 3.0),
        (0, 2, 2.0),
        (0, 5, 3.0),
        (1, 3, 1.0),
        (1, 2, 6.0),
        (2, 3, 1.0),
        (2, 4, 10.0),
        (3, 4, 5.0),
        (5, 4, 7.0),
    ];
    for (from, to, weight) in edges {
        graph.add_edge(from, to, OrderedFloat(weight)).unwrap();
    }
    graph
}

#[test]
fn test_reference_topological_order() {
    let graph = reference_dag();
    let engine = DagShortestPath::new();

    let order = engine.topological_order(&graph).unwrap();
    assert_eq!(order, vec![6, 0, 5, 1, 2, 3, 4]);
}

#[test]
fn test_reference_distances() {
    let graph = reference_dag();
    let engine = DagShortestPath::new();

    let distances = engine.shortest_distances_from(&graph, 0).unwrap();
    assert_eq!(distances[4], Some(OrderedFloat(8.0)), "0 -> 4 should cost 8");
    assert_eq!(distances[6], None, "isolated vertex must stay unknown");
}

#[test]
fn test_topological_order_respects_edges() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_dag(&mut rng, 50, 200, 1.0, 10.0).unwrap();
    let engine = DagShortestPath::new();

    let order = engine.topological_order(&graph).unwrap();
    assert_eq!(order.len(), 50);

    let mut position = vec![0usize; 50];
    for (pos, &vertex) in order.iter().enumerate() {
        position[vertex] = pos;
    }

    for from in 0..50 {
        for &(to, _) in graph.edges_from(from) {
            assert!(
                position[from] < position[to],
                "edge {from} -> {to} points backward in the ordering"
            );
        }
    }
}

#[test]
fn test_cycle_is_rejected() {
    let mut graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::new(4);
    graph.add_edge(0, 1, OrderedFloat(1.0)).unwrap();
    graph.add_edge(1, 2, OrderedFloat(1.0)).unwrap();
    graph.add_edge(2, 0, OrderedFloat(1.0)).unwrap();
    graph.add_edge(2, 3, OrderedFloat(1.0)).unwrap();

    let engine = DagShortestPath::new();
    let err = engine.topological_order(&graph).unwrap_err();
    assert!(matches!(err, Error::CycleDetected(_)), "got {err:?}");

    let err = engine.shortest_distances_from(&graph, 0).unwrap_err();
    assert!(matches!(err, Error::CycleDetected(_)), "got {err:?}");
}

#[test]
fn test_self_loop_is_rejected() {
    let mut graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::new(2);
    graph.add_edge(0, 0, OrderedFloat(1.0)).unwrap();

    let engine = DagShortestPath::new();
    let err = engine.topological_order(&graph).unwrap_err();
    assert_eq!(err, Error::CycleDetected(0));
}

#[test]
fn test_negative_weights_supported() {
    // The same edge set fails the priority engine but is fine here
    let mut graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::new(4);
    graph.add_edge(0, 1, OrderedFloat(2.0)).unwrap();
    graph.add_edge(0, 2, OrderedFloat(4.0)).unwrap();
    graph.add_edge(1, 2, OrderedFloat(-3.0)).unwrap();
    graph.add_edge(2, 3, OrderedFloat(1.0)).unwrap();

    let dijkstra = Dijkstra::new();
    let err = dijkstra.shortest_distance(&graph, 0, 3).unwrap_err();
    assert!(matches!(err, Error::NegativeWeight { .. }), "got {err:?}");

    let engine = DagShortestPath::new();
    let distances = engine.shortest_distances_from(&graph, 0).unwrap();
    assert_eq!(distances[1], Some(OrderedFloat(2.0)));
    assert_eq!(distances[2], Some(OrderedFloat(-1.0)), "negative detour wins");
    assert_eq!(distances[3], Some(OrderedFloat(0.0)));
}

#[test]
fn test_path_reconstruction_from_dag_result() {
    let graph = reference_dag();
    let engine = DagShortestPath::new();

    let result = engine.compute_shortest_paths(&graph, 0).unwrap();
    // 0 -> 4 costs 8 via 2 and 3
    assert_eq!(result.path_to(4), Some(vec![0, 2, 3, 4]));
    assert_eq!(result.path_to(6), None, "no path to the isolated vertex");
    assert_eq!(result.path_to(0), Some(vec![0]), "path to self is the source");
}

#[test]
fn test_invalid_source() {
    let graph = reference_dag();
    let engine = DagShortestPath::new();

    let err = engine.shortest_distances_from(&graph, 12).unwrap_err();
    assert_eq!(err, Error::InvalidVertex(12));
}
