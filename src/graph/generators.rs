use crate::graph::DirectedGraph;
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with n vertices and roughly m edges
///
/// Weights are drawn uniformly from `(0, max_weight]`, so the result is
/// always valid input for the priority relaxation engine. Self-loops are
/// skipped. Deterministic for a seeded `rng`.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    n: usize,
    m: usize,
    max_weight: f64,
) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let mut graph = DirectedGraph::new(n);

    let mut added = 0;
    while added < m {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        if from == to {
            continue;
        }

        let weight = OrderedFloat(rng.gen_range(0.0..max_weight) + f64::EPSILON);
        graph.add_edge(from, to, weight)?;
        added += 1;
    }

    Ok(graph)
}

/// Generates a random directed acyclic graph with n vertices and roughly
/// m edges
///
/// A random permutation of the vertices fixes a topological order; every
/// edge points from an earlier to a later position, so the result is acyclic
/// by construction. Weights are drawn uniformly from `[min_weight,
/// max_weight)` and may be negative.
pub fn random_dag<R: Rng>(
    rng: &mut R,
    n: usize,
    m: usize,
    min_weight: f64,
    max_weight: f64,
) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    assert!(n > 1, "a DAG with edges needs at least two vertices");
    assert!(min_weight < max_weight, "empty weight range");

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    let mut graph = DirectedGraph::new(n);

    let mut added = 0;
    while added < m {
        let i = rng.gen_range(0..n - 1);
        let j = rng.gen_range(i + 1..n);

        let weight = OrderedFloat(rng.gen_range(min_weight..max_weight));
        graph.add_edge(order[i], order[j], weight)?;
        added += 1;
    }

    Ok(graph)
}
