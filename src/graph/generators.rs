use ordered_float::OrderedFloat;
use rand::prelude::*;

use crate::graph::{Graph, MutableGraph, SparseGraph};
use crate::Result;

/// Generates a random graph with `nodes` present keys and up to `edges`
/// strictly positive edges
///
/// Self-loops and pairs where either direction already exists are skipped, so
/// the requested edge count is an upper bound. Weights are drawn uniformly
/// from `1.0..100.0`.
pub fn random_positive_graph(
    nodes: usize,
    edges: usize,
) -> Result<SparseGraph<OrderedFloat<f64>>> {
    assert!(nodes > 0, "nodes must be positive");

    let mut graph = SparseGraph::with_capacity(nodes);
    for key in 0..nodes {
        graph.insert_node(key)?;
    }

    let mut rng = rand::thread_rng();
    for _ in 0..edges {
        let origin = rng.gen_range(0..nodes);
        let destination = rng.gen_range(0..nodes);

        if origin == destination
            || graph.has_edge(origin, destination)?
            || graph.has_edge(destination, origin)?
        {
            continue;
        }

        let weight = OrderedFloat(rng.gen_range(1.0..100.0));
        graph.add_edge(origin, weight, destination)?;
    }

    Ok(graph)
}
