use num_traits::{Float, Zero};
use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;

use crate::graph::Graph;
use crate::{Error, Result};

/// Wave algorithm: breadth-first edge count between a pair of nodes
///
/// Edge weights are ignored entirely; only edge direction matters. The
/// pairwise shape does not fit the single-source trait, so the query is an
/// inherent method.
#[derive(Debug, Default)]
pub struct Wave;

impl Wave {
    /// Creates a new wave algorithm instance
    pub fn new() -> Self {
        Wave
    }

    /// Number of edges on a shortest directed path from origin to destination
    pub fn hop_count<W, G>(&self, graph: &G, origin: usize, destination: usize) -> Result<usize>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        if !graph.contains_node(origin) {
            return Err(Error::NotFound(origin));
        }
        if !graph.contains_node(destination) {
            return Err(Error::NotFound(destination));
        }
        if origin == destination {
            return Ok(0);
        }

        let mut visited = HashSet::new();
        visited.insert(origin);

        let mut frontier = VecDeque::new();
        frontier.push_back((origin, 0));

        while let Some((current, hops)) = frontier.pop_front() {
            for (neighbor, _) in graph.outgoing_edges(current) {
                if neighbor == destination {
                    return Ok(hops + 1);
                }
                if visited.insert(neighbor) {
                    frontier.push_back((neighbor, hops + 1));
                }
            }
        }

        Err(Error::NoPathExists(origin, destination))
    }
}
