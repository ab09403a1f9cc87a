use log::debug;
use num_traits::{Float, ToPrimitive, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm: priority-queue relaxation for graphs with
/// non-negative edge weights
///
/// Every edge weight is validated before the main loop runs, so a graph
/// containing any negative weight fails the whole query with
/// [`Error::NegativeWeight`] whether or not that edge is reachable.
///
/// A popped vertex's distance is final, so a query with a known target can
/// stop as soon as the target is popped; [`Dijkstra::compute_to_target`]
/// exposes that early exit.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Compute shortest paths from `source`, stopping once `target` is
    /// finalized
    ///
    /// Distances of vertices not yet finalized at the early exit are left as
    /// found; only `target`'s entry (and the finalized ones) are guaranteed
    /// minimal.
    pub fn compute_to_target<W, G>(
        &self,
        graph: &G,
        source: usize,
        target: usize,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }
        self.run(graph, source, Some(target))
    }

    /// Compute the shortest distance from `source` to `target`
    ///
    /// `None` means the target is unreachable; that is a normal result, not
    /// an error.
    pub fn shortest_distance<W, G>(
        &self,
        graph: &G,
        source: usize,
        target: usize,
    ) -> Result<Option<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        let result = self.compute_to_target(graph, source, target)?;
        Ok(result.distance_to(target))
    }

    /// Compute the shortest path from `source` to `target` as a vertex
    /// sequence, empty if the target is unreachable
    pub fn shortest_path<W, G>(&self, graph: &G, source: usize, target: usize) -> Result<Vec<usize>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        let result = self.compute_to_target(graph, source, target)?;
        Ok(result.path_to(target).unwrap_or_default())
    }

    fn run<W, G>(
        &self,
        graph: &G,
        source: usize,
        target: Option<usize>,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        // Non-negativity is this engine's contract; the graph store accepts
        // negative weights for the DAG engine's sake, so the check happens
        // here, before any relaxation.
        for from in 0..graph.vertex_count() {
            for (to, weight) in graph.outgoing_edges(from) {
                if weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from,
                        to,
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
        }

        let n = graph.vertex_count();

        // Initialize distances, predecessors and the finalized set
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];

        // Distance to source is 0
        distances[source] = Some(W::zero());

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());

        let mut settled = 0usize;

        // Main Dijkstra loop
        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry: u was finalized through a cheaper path after this
            // entry was pushed
            if visited[u] {
                continue;
            }
            visited[u] = true;
            settled += 1;

            // A popped vertex's distance is final, so reaching the target
            // ends the query
            if target == Some(u) {
                break;
            }

            // Relax all outgoing edges of the just-finalized vertex
            for (v, weight) in graph.outgoing_edges(u) {
                if visited[v] {
                    continue;
                }

                let new_dist = dist_u + weight;
                let improved = match distances[v] {
                    None => true,
                    Some(current) => new_dist < current,
                };

                if improved {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    // No decrease-key: push a fresh entry, the stale one is
                    // discarded when popped
                    queue.push(v, new_dist);
                }
            }
        }

        debug!("dijkstra settled {settled} of {n} vertices from source {source}");

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.run(graph, source, None)
    }
}
