use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{DistanceMap, SingleSourceShortestPaths};
use crate::graph::Graph;
use crate::{Error, Result};

/// Bellman-Ford algorithm for general edge weights
///
/// Accepts negative weights; a graph holding a reachable negative-weight
/// cycle is rejected outright rather than producing partial distances.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> SingleSourceShortestPaths<W, G> for BellmanFord
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn shortest_distances(&self, graph: &G, origin: usize) -> Result<DistanceMap<W>> {
        if !graph.contains_node(origin) {
            return Err(Error::NotFound(origin));
        }

        // The adjacency structure is walked once; every relaxation pass below
        // works on this flat list.
        let edges: Vec<(usize, usize, W)> = graph
            .node_keys()
            .flat_map(|from| {
                graph
                    .outgoing_edges(from)
                    .map(move |(to, weight)| (from, to, weight))
            })
            .collect();

        let mut distances: DistanceMap<W> = graph
            .node_keys()
            .map(|key| (key, W::infinity()))
            .collect();
        distances.insert(origin, W::zero());

        let passes = graph.node_count().saturating_sub(1);
        for _ in 0..passes {
            let mut updated = false;

            for &(u, v, weight) in &edges {
                let dist_u = match distances.get(&u) {
                    Some(&dist) => dist,
                    None => continue,
                };
                // An infinite source can never improve anything
                if dist_u.is_infinite() {
                    continue;
                }

                let candidate = dist_u + weight;
                let improves = distances.get(&v).map_or(false, |&best| candidate < best);
                if improves {
                    distances.insert(v, candidate);
                    updated = true;
                }
            }

            if !updated {
                break;
            }
        }

        // One extra pass: any edge that still relaxes sits on a cycle whose
        // accumulated weight is negative.
        for &(u, v, weight) in &edges {
            let dist_u = match distances.get(&u) {
                Some(&dist) => dist,
                None => continue,
            };
            if dist_u.is_infinite() {
                continue;
            }

            let still_relaxes = distances
                .get(&v)
                .map_or(false, |&best| dist_u + weight < best);
            if still_relaxes {
                return Err(Error::NegativeCycle);
            }
        }

        distances.remove(&origin);
        Ok(distances)
    }
}
