use log::debug;
use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// DFS coloring for the topological sort: `Active` marks a vertex still on
/// the traversal path, so meeting one again means a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Active,
    Done,
}

/// A DFS stack frame: one vertex plus a cursor into its successor list
#[derive(Debug)]
struct Frame {
    vertex: usize,
    successors: Vec<usize>,
    next: usize,
}

/// Shortest paths on a directed acyclic graph via topological-order
/// relaxation
///
/// A topological sort (reverse DFS post-order) fixes the relaxation order;
/// one linear pass over the vertices then relaxes each edge exactly once, so
/// no priority structure is needed and the whole query runs in O(N + E).
/// Unlike [`crate::Dijkstra`] this engine accepts negative edge weights, but
/// the graph must be acyclic: any cycle reachable from the traversal fails
/// the query with [`Error::CycleDetected`].
#[derive(Debug, Default)]
pub struct DagShortestPath;

impl DagShortestPath {
    /// Creates a new DAG shortest path engine
    pub fn new() -> Self {
        DagShortestPath
    }

    /// Computes a topological ordering of the whole graph
    ///
    /// Depth-first traversal from every unvisited vertex in ascending id
    /// order, assigning each finished vertex the largest unused position
    /// (reverse post-order). The recursion is replaced by an explicit stack
    /// so ordering depth is not limited by the call stack; the numbering is
    /// identical to the recursive formulation.
    pub fn topological_order<W, G>(&self, graph: &G) -> Result<Vec<usize>>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut marks = vec![Mark::Unvisited; n];
        let mut ordering = vec![0usize; n];
        let mut index = n;

        let mut stack: Vec<Frame> = Vec::new();

        for root in 0..n {
            if marks[root] != Mark::Unvisited {
                continue;
            }

            marks[root] = Mark::Active;
            stack.push(Frame {
                vertex: root,
                successors: graph.outgoing_edges(root).map(|(to, _)| to).collect(),
                next: 0,
            });

            while let Some(frame) = stack.last_mut() {
                if let Some(&v) = frame.successors.get(frame.next) {
                    frame.next += 1;
                    match marks[v] {
                        Mark::Active => return Err(Error::CycleDetected(v)),
                        Mark::Done => {}
                        Mark::Unvisited => {
                            marks[v] = Mark::Active;
                            stack.push(Frame {
                                vertex: v,
                                successors: graph.outgoing_edges(v).map(|(to, _)| to).collect(),
                                next: 0,
                            });
                        }
                    }
                } else {
                    // All successors finished: assign the next-largest slot
                    let finished = frame.vertex;
                    marks[finished] = Mark::Done;
                    index -= 1;
                    ordering[index] = finished;
                    stack.pop();
                }
            }
        }

        Ok(ordering)
    }

    /// Computes shortest distances from `source` to every vertex
    ///
    /// `None` entries mark vertices unreachable from the source.
    pub fn shortest_distances_from<W, G>(
        &self,
        graph: &G,
        source: usize,
    ) -> Result<Vec<Option<W>>>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        let result = self.compute_shortest_paths(graph, source)?;
        Ok(result.distances)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for DagShortestPath
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "DagShortestPath"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let order = self.topological_order(graph)?;

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut relaxed = 0usize;

        // Vertices earlier in the ordering can never be improved by later
        // ones, so a single pass relaxes every edge exactly once
        for &u in &order {
            let Some(dist_u) = distances[u] else {
                continue;
            };

            for (v, weight) in graph.outgoing_edges(u) {
                let new_dist = dist_u + weight;
                let improved = match distances[v] {
                    None => true,
                    Some(current) => new_dist < current,
                };

                if improved {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                }
                relaxed += 1;
            }
        }

        debug!("dag relaxation: {relaxed} edges relaxed from source {source}");

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
