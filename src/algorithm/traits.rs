use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::Graph;
use crate::Result;

/// Shortest distances from an origin to every other present node
///
/// The origin itself is excluded; unreachable nodes map to `W::infinity()`.
pub type DistanceMap<W> = HashMap<usize, W>;

/// Trait for single-source shortest path algorithms
pub trait SingleSourceShortestPaths<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest distances from the origin to all other present nodes
    fn shortest_distances(&self, graph: &G, origin: usize) -> Result<DistanceMap<W>>;
}
