//! Pathwave - sparse directed graph with shortest-path queries
//!
//! This library provides a capacity-indexed sparse directed weighted graph
//! and three read-only queries over it: Dijkstra's algorithm for strictly
//! positive weights, Bellman-Ford for general weights with negative-cycle
//! detection, and the wave (breadth-first) algorithm for the unweighted
//! distance between a pair of nodes.
//!
//! Node keys are non-negative integers with holes allowed: removing a node
//! leaves an absent slot behind and keeps every other key stable.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, wave::Wave, DistanceMap,
    SingleSourceShortestPaths,
};
/// Re-export main types for convenient use
pub use graph::sparse::SparseGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Node {0} is not in the graph")]
    NotFound(usize),

    #[error("Node {0} already exists in the graph")]
    AlreadyExists(usize),

    #[error("The reverse edge from {1} to {0} already exists")]
    ConflictingDirection(usize, usize),

    #[error("No edge from {0} to {1}")]
    NoSuchEdge(usize, usize),

    #[error("Graph contains an edge with negative or zero weight")]
    NegativeOrZeroWeight,

    #[error("Graph contains a negative-weight cycle")]
    NegativeCycle,

    #[error("No path from {0} to {1}")]
    NoPathExists(usize, usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
