use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{DistanceMap, SingleSourceShortestPaths};
use crate::data_structures::MinQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm for strictly positive edge weights
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> SingleSourceShortestPaths<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_distances(&self, graph: &G, origin: usize) -> Result<DistanceMap<W>> {
        if !graph.contains_node(origin) {
            return Err(Error::NotFound(origin));
        }

        // The whole graph is checked, not just the reachable part: a single
        // non-positive edge anywhere disqualifies the query.
        if !graph.all_weights_strictly_positive() {
            return Err(Error::NegativeOrZeroWeight);
        }

        let mut distances: DistanceMap<W> = graph
            .node_keys()
            .map(|key| (key, W::infinity()))
            .collect();
        distances.insert(origin, W::zero());

        let mut frontier = MinQueue::new();
        frontier.push(origin, W::zero());

        while let Some((current, dist_current)) = frontier.pop() {
            // Skip stale entries superseded by a better distance
            if let Some(&best) = distances.get(&current) {
                if best < dist_current {
                    continue;
                }
            }

            for (neighbor, weight) in graph.outgoing_edges(current) {
                let candidate = dist_current + weight;

                let improves = distances
                    .get(&neighbor)
                    .map_or(false, |&best| candidate < best);
                if improves {
                    distances.insert(neighbor, candidate);
                    frontier.push(neighbor, candidate);
                }
            }
        }

        distances.remove(&origin);
        Ok(distances)
    }
}
