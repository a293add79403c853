pub mod bellman_ford;
pub mod dijkstra;
pub mod traits;
pub mod wave;

pub use traits::{DistanceMap, SingleSourceShortestPaths};
