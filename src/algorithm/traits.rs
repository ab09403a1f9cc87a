use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
///
/// The distance and predecessor tables are scratch state owned by a single
/// query: each call to an engine allocates fresh tables, so results from
/// concurrent queries over a shared graph never alias.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex; `None` means unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the computed distance to `target`, or `None` if the target is
    /// out of range or unreachable from the source
    pub fn distance_to(&self, target: usize) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    /// Reconstructs the shortest path from the source to `target` by walking
    /// predecessor links backward
    ///
    /// Returns the vertex sequence from source to target inclusive, in
    /// forward order. `None` if the target was never reached, or if the walk
    /// does not arrive at the source within `num_nodes` steps (which would
    /// indicate a corrupted predecessor table).
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.predecessors.len() || self.distances[target].is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;

        while current != self.source {
            path.push(current);
            current = self.predecessors[current]?;

            // A valid simple path never revisits a vertex
            if path.len() > self.predecessors.len() {
                return None;
            }
        }

        path.push(self.source);
        path.reverse();

        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
