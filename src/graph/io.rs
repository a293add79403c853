use log::warn;
use ordered_float::OrderedFloat;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::graph::{Graph, MutableGraph, SparseGraph};

/// One parsed `(origin,weight,destination)` line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord {
    pub origin: usize,
    pub weight: f64,
    pub destination: usize,
}

/// Failure to parse a single edge record line
#[derive(thiserror::Error, Debug)]
#[error("Malformed edge record: {0:?}")]
pub struct ParseEdgeError(String);

impl FromStr for EdgeRecord {
    type Err = ParseEdgeError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseEdgeError(line.to_string());

        let body = line
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;

        let mut fields = body.split(',').map(str::trim);
        let origin = fields
            .next()
            .and_then(|field| field.parse().ok())
            .ok_or_else(malformed)?;
        let weight = fields
            .next()
            .and_then(|field| field.parse().ok())
            .ok_or_else(malformed)?;
        let destination = fields
            .next()
            .and_then(|field| field.parse().ok())
            .ok_or_else(malformed)?;

        if fields.next().is_some() {
            return Err(malformed());
        }

        Ok(EdgeRecord {
            origin,
            weight,
            destination,
        })
    }
}

/// Errors raised while ingesting a graph from its textual edge-list form
#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] crate::Error),
}

/// Reads `(origin,weight,destination)` lines into a graph
///
/// Blank lines are ignored and malformed lines are skipped with a warning.
/// Endpoints are inserted idempotently, so the same key may appear on any
/// number of lines. Store-level rejections such as a conflicting direction
/// abort the load.
pub fn read_graph<R: BufRead>(input: R) -> Result<SparseGraph<OrderedFloat<f64>>, IngestError> {
    let mut graph = SparseGraph::new();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: EdgeRecord = match line.parse() {
            Ok(record) => record,
            Err(error) => {
                warn!("Skipping line: {}", error);
                continue;
            }
        };

        if !graph.contains_node(record.origin) {
            graph.insert_node(record.origin)?;
        }
        if !graph.contains_node(record.destination) {
            graph.insert_node(record.destination)?;
        }
        graph.add_edge(
            record.origin,
            OrderedFloat(record.weight),
            record.destination,
        )?;
    }

    Ok(graph)
}

/// Loads a graph from a text file of edge records
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<SparseGraph<OrderedFloat<f64>>, IngestError> {
    let file = File::open(path)?;
    read_graph(BufReader::new(file))
}
