use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over (vertex, priority) pairs for shortest path
/// relaxation
///
/// Entries are ordered by ascending priority; equal priorities break ties by
/// ascending vertex id, which keeps pop order deterministic. There is no
/// decrease-key: an improved distance is pushed as a fresh entry and the
/// superseded one is discarded by the caller when popped (lazy deletion).
#[derive(Debug)]
pub struct BinaryHeapWrapper<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> BinaryHeapWrapper<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, counting stale ones
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes and returns the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

impl<V, P> Default for BinaryHeapWrapper<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
