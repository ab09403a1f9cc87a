use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Trait representing a weighted directed graph
///
/// This is the read-only view consumed by the shortest-path engines. The
/// concrete store is built once and never mutated during a query, so a shared
/// reference may be handed to concurrent queries as long as each query
/// allocates its own scratch tables.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in
    /// insertion order. Empty for a vertex with no outgoing edges.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;
}
