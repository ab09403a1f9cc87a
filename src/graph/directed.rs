use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
///
/// Vertices are dense indices in `[0, num_nodes)`, fixed at construction.
/// Edges are appended incrementally and never removed; each adjacency list
/// keeps insertion order, so traversal over equal-cost alternatives is
/// deterministic.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: adjacency[v] = [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new directed graph with the specified number of vertices
    /// and no edges
    pub fn new(num_nodes: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); num_nodes],
        }
    }

    /// Adds a directed edge from `from` to `to` with the given weight
    ///
    /// Fails with [`Error::InvalidVertex`] if either endpoint is out of
    /// range. Negative weights are accepted here: the same graph may be
    /// queried by the DAG engine, which supports them. The non-negativity
    /// contract of [`crate::Dijkstra`] is enforced at query time instead.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) {
            return Err(Error::InvalidVertex(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }

        self.adjacency[from].push((to, weight));
        Ok(())
    }

    /// Returns the outgoing edges of a vertex as a slice, in insertion order
    ///
    /// Empty slice (not an error) for a vertex with no outgoing edges or an
    /// out-of-range index.
    pub fn edges_from(&self, vertex: usize) -> &[(usize, W)] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }
}
