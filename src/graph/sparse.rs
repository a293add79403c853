use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// A single outgoing edge, owned by its origin node
#[derive(Debug, Clone, Copy)]
struct Edge<W> {
    weight: W,
    destination: usize,
}

/// A sparse directed graph backed by a capacity-indexed slot table
///
/// Each key in `[0, capacity)` maps to a slot that is either absent or holds
/// the node's outgoing edges. Capacity grows to `key + 1` whenever a node is
/// inserted past the end and never shrinks, so keys stay stable across
/// removals and holes are allowed anywhere in the table.
#[derive(Debug, Clone)]
pub struct SparseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// One entry per allocated key; `None` marks a hole
    slots: Vec<Option<Vec<Edge<W>>>>,

    /// Number of present nodes, maintained incrementally
    node_count: usize,
}

impl<W> SparseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph with no allocated slots
    pub fn new() -> Self {
        SparseGraph {
            slots: Vec::new(),
            node_count: 0,
        }
    }

    /// Creates a graph with the given number of pre-allocated absent slots
    pub fn with_capacity(capacity: usize) -> Self {
        SparseGraph {
            slots: vec![None; capacity],
            node_count: 0,
        }
    }

    fn edges(&self, key: usize) -> Option<&Vec<Edge<W>>> {
        self.slots.get(key).and_then(|slot| slot.as_ref())
    }

    fn edges_mut(&mut self, key: usize) -> Option<&mut Vec<Edge<W>>> {
        self.slots.get_mut(key).and_then(|slot| slot.as_mut())
    }

    fn require_node(&self, key: usize) -> Result<()> {
        if self.contains_node(key) {
            Ok(())
        } else {
            Err(Error::NotFound(key))
        }
    }
}

impl<W> Default for SparseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        SparseGraph::new()
    }
}

impl<W> Graph<W> for SparseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn edge_count(&self) -> usize {
        self.slots.iter().flatten().map(|edges| edges.len()).sum()
    }

    fn contains_node(&self, key: usize) -> bool {
        self.edges(key).is_some()
    }

    fn node_keys(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(
            self.slots
                .iter()
                .enumerate()
                .filter_map(|(key, slot)| slot.as_ref().map(|_| key)),
        )
    }

    fn outgoing_edges(&self, key: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.edges(key) {
            Box::new(edges.iter().map(|edge| (edge.destination, edge.weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_edge(&self, origin: usize, destination: usize) -> Result<bool> {
        self.require_node(origin)?;
        self.require_node(destination)?;
        Ok(self.edge_weight(origin, destination).is_some())
    }

    fn edge_weight(&self, origin: usize, destination: usize) -> Option<W> {
        self.edges(origin).and_then(|edges| {
            edges
                .iter()
                .find(|edge| edge.destination == destination)
                .map(|edge| edge.weight)
        })
    }
}

impl<W> MutableGraph<W> for SparseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn insert_node(&mut self, key: usize) -> Result<()> {
        if self.contains_node(key) {
            return Err(Error::AlreadyExists(key));
        }

        if key >= self.slots.len() {
            self.slots.resize(key + 1, None);
        }

        self.slots[key] = Some(Vec::new());
        self.node_count += 1;
        Ok(())
    }

    fn remove_node(&mut self, key: usize) -> Result<()> {
        self.require_node(key)?;

        self.slots[key] = None;
        self.node_count -= 1;

        // Strip every edge that targeted the removed key. The store keeps no
        // reverse-adjacency index, so this is a linear scan over all slots.
        for slot in &mut self.slots {
            if let Some(edges) = slot.as_mut() {
                edges.retain(|edge| edge.destination != key);
            }
        }

        Ok(())
    }

    fn add_edge(&mut self, origin: usize, weight: W, destination: usize) -> Result<()> {
        self.require_node(origin)?;
        self.require_node(destination)?;

        // The two directions of a pair are mutually exclusive, and the check
        // runs before the overwrite path: a self-loop is its own reverse, so
        // re-adding one is rejected rather than updated.
        let reverse_exists = self
            .edges(destination)
            .map_or(false, |edges| edges.iter().any(|edge| edge.destination == origin));
        if reverse_exists {
            return Err(Error::ConflictingDirection(origin, destination));
        }

        if let Some(edges) = self.edges_mut(origin) {
            // Re-inserting between the same pair overwrites the weight in
            // place, keeping the edge's position in the collection.
            for edge in edges.iter_mut() {
                if edge.destination == destination {
                    edge.weight = weight;
                    return Ok(());
                }
            }

            edges.push(Edge {
                weight,
                destination,
            });
        }

        Ok(())
    }

    fn remove_edge(&mut self, origin: usize, destination: usize) -> Result<W> {
        self.require_node(origin)?;
        self.require_node(destination)?;

        if let Some(edges) = self.edges_mut(origin) {
            if let Some(position) = edges
                .iter()
                .position(|edge| edge.destination == destination)
            {
                return Ok(edges.remove(position).weight);
            }
        }

        Err(Error::NoSuchEdge(origin, destination))
    }
}
