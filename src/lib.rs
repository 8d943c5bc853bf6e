//! Transit Routes - cheapest-route search over small transit networks
//!
//! The library builds undirected weighted graphs with a fixed number of vertices
//! and answers single-source shortest path queries with Dijkstra's algorithm,
//! returning the route as an ordered list of segments with per-segment costs.
//!
//! Edge weights must be non-negative. Unreachable destinations yield an empty
//! route rather than an error.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod transit;

pub use algorithm::{
    dijkstra::Dijkstra, path::PathSegment, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;
pub use transit::{Route, RouteLeg, TransitNetwork};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid vertex ID {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("Invalid vertex count: {0}")]
    InvalidVertexCount(usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),

    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Unknown stop: {0}")]
    UnknownStop(String),

    #[error("Duplicate stop: {0}")]
    DuplicateStop(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
