use ordered_float::OrderedFloat;
use pathwave::graph::{MutableGraph, SparseGraph};
use pathwave::{Dijkstra, Error, SingleSourceShortestPaths};

fn w(value: f64) -> OrderedFloat<f64> {
    OrderedFloat(value)
}

fn graph_with_nodes(count: usize) -> SparseGraph<OrderedFloat<f64>> {
    let mut graph = SparseGraph::with_capacity(count);
    for key in 0..count {
        graph.insert_node(key).unwrap();
    }
    graph
}

#[test]
fn basic_shortest_paths() {
    let mut graph = graph_with_nodes(4);
    graph.add_edge(0, w(5.0), 1).unwrap();
    graph.add_edge(0, w(2.0), 2).unwrap();
    graph.add_edge(2, w(1.0), 1).unwrap();
    graph.add_edge(1, w(3.0), 3).unwrap();

    let distances = Dijkstra::new().shortest_distances(&graph, 0).unwrap();

    assert_eq!(distances[&1], w(3.0)); // 0 -> 2 -> 1
    assert_eq!(distances[&2], w(2.0)); // direct edge
    assert_eq!(distances[&3], w(6.0)); // 0 -> 2 -> 1 -> 3
    // The origin itself is excluded from the result
    assert_eq!(distances.len(), 3);
    assert!(!distances.contains_key(&0));
}

#[test]
fn unreachable_nodes_map_to_infinity() {
    let mut graph = graph_with_nodes(3);
    graph.add_edge(0, w(1.0), 1).unwrap();
    graph.add_edge(2, w(1.0), 1).unwrap();

    let distances = Dijkstra::new().shortest_distances(&graph, 0).unwrap();

    assert_eq!(distances[&2], w(f64::INFINITY));
}

#[test]
fn single_node_graph_yields_an_empty_map() {
    let graph = graph_with_nodes(1);

    let distances = Dijkstra::new().shortest_distances(&graph, 0).unwrap();

    assert!(distances.is_empty());
}

#[test]
fn longer_detour_does_not_replace_direct_path() {
    let mut graph = graph_with_nodes(3);
    graph.add_edge(0, w(5.0), 1).unwrap();
    graph.add_edge(0, w(10.0), 2).unwrap();
    graph.add_edge(2, w(1.0), 1).unwrap();

    let distances = Dijkstra::new().shortest_distances(&graph, 0).unwrap();
    assert_eq!(distances[&1], w(5.0));

    graph.remove_edge(2, 1).unwrap();
    graph.add_edge(1, w(1.0), 2).unwrap();

    let distances = Dijkstra::new().shortest_distances(&graph, 0).unwrap();
    assert_eq!(distances[&1], w(5.0));
    assert_eq!(distances[&2], w(6.0)); // 0 -> 1 -> 2 beats the direct edge
}

#[test]
fn negative_weight_anywhere_rejects_the_query() {
    let mut graph = graph_with_nodes(2);
    graph.add_edge(0, w(-2.0), 1).unwrap();

    assert_eq!(
        Dijkstra::new().shortest_distances(&graph, 0),
        Err(Error::NegativeOrZeroWeight)
    );
}

#[test]
fn zero_weight_counts_as_non_positive() {
    let mut graph = graph_with_nodes(2);
    graph.add_edge(0, w(0.0), 1).unwrap();

    assert_eq!(
        Dijkstra::new().shortest_distances(&graph, 0),
        Err(Error::NegativeOrZeroWeight)
    );
}

#[test]
fn the_weight_check_covers_unreachable_edges() {
    let mut graph = graph_with_nodes(4);
    graph.add_edge(0, w(1.0), 1).unwrap();
    // A bad edge in a component the origin never reaches still disqualifies
    graph.add_edge(2, w(-1.0), 3).unwrap();

    assert_eq!(
        Dijkstra::new().shortest_distances(&graph, 0),
        Err(Error::NegativeOrZeroWeight)
    );
}

#[test]
fn absent_origin_fails() {
    let graph = graph_with_nodes(1);

    assert_eq!(
        Dijkstra::new().shortest_distances(&graph, 1),
        Err(Error::NotFound(1))
    );
}

#[test]
fn complex_topology() {
    let mut graph = graph_with_nodes(6);
    graph.add_edge(0, w(7.0), 1).unwrap();
    graph.add_edge(0, w(9.0), 2).unwrap();
    graph.add_edge(0, w(14.0), 5).unwrap();
    graph.add_edge(1, w(10.0), 2).unwrap();
    graph.add_edge(1, w(15.0), 3).unwrap();
    graph.add_edge(2, w(2.0), 5).unwrap();
    graph.add_edge(2, w(11.0), 3).unwrap();
    graph.add_edge(5, w(9.0), 4).unwrap();
    graph.add_edge(3, w(6.0), 4).unwrap();

    let distances = Dijkstra::new().shortest_distances(&graph, 0).unwrap();

    assert_eq!(distances[&4], w(20.0)); // 0 -> 2 -> 5 -> 4
    assert_eq!(distances[&3], w(20.0)); // 0 -> 2 -> 3
}

#[test]
fn an_overwritten_weight_is_the_one_used() {
    let mut graph = graph_with_nodes(2);
    graph.add_edge(0, w(5.0), 1).unwrap();
    graph.add_edge(0, w(3.0), 1).unwrap();

    let distances = Dijkstra::new().shortest_distances(&graph, 0).unwrap();

    assert_eq!(distances[&1], w(3.0));
}
