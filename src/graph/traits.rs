use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::Result;

/// Trait representing a read-only view of a sparse weighted directed graph
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of present nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of allocated key slots, present or not
    fn capacity(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if no node is present
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Returns true if the key denotes a present node; out-of-range keys are false
    fn contains_node(&self, key: usize) -> bool;

    /// Returns an iterator over the keys of all present nodes
    fn node_keys(&self) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns an iterator over the outgoing edges of a node as (destination, weight)
    fn outgoing_edges(&self, key: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the forward edge origin -> destination exists.
    /// Fails with `NotFound` if either endpoint is absent.
    fn has_edge(&self, origin: usize, destination: usize) -> Result<bool>;

    /// Gets the weight of the forward edge if it exists
    fn edge_weight(&self, origin: usize, destination: usize) -> Option<W>;

    /// Returns true if every edge in the graph has weight > 0.
    /// A zero weight counts as a failure, not only negative ones.
    fn all_weights_strictly_positive(&self) -> bool {
        self.node_keys()
            .all(|key| self.outgoing_edges(key).all(|(_, weight)| weight > W::zero()))
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Inserts a node at the given key, extending capacity if needed.
    /// Fails with `AlreadyExists` if the key is already present.
    fn insert_node(&mut self, key: usize) -> Result<()>;

    /// Removes a node and every edge that references it, from either side.
    /// Fails with `NotFound` if the key is absent.
    fn remove_node(&mut self, key: usize) -> Result<()>;

    /// Adds a directed edge, or overwrites the weight of an existing one.
    /// Fails with `NotFound` on absent endpoints and with
    /// `ConflictingDirection` if the reverse edge already exists.
    fn add_edge(&mut self, origin: usize, weight: W, destination: usize) -> Result<()>;

    /// Removes the forward edge and returns its prior weight.
    /// Fails with `NotFound` on absent endpoints or `NoSuchEdge` if the
    /// forward edge does not exist.
    fn remove_edge(&mut self, origin: usize, destination: usize) -> Result<W>;
}
