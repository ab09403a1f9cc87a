//! Shortest Paths - Single-Source Shortest Path over Weighted Directed Graphs
//!
//! This library provides two complementary shortest-path engines over the same
//! adjacency-list graph store:
//!
//! - [`Dijkstra`]: priority-queue relaxation for general graphs with real
//!   non-negative edge weights, with optional early exit at a target vertex.
//! - [`DagShortestPath`]: topological-order linear relaxation for directed
//!   acyclic graphs, correct for arbitrary finite (including negative) weights.
//!
//! Both engines produce a [`ShortestPathResult`] holding the distance and
//! predecessor tables, from which paths can be reconstructed.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dag::DagShortestPath, dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize, weight: f64 },

    #[error("Cycle detected through vertex {0}")]
    CycleDetected(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
