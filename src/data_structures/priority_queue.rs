use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-priority queue of node indices keyed by tentative distance
///
/// Entries with equal distance pop in insertion order, so searches over the
/// same graph always settle nodes in the same sequence.
#[derive(Debug, Default)]
pub struct BinaryHeapWrapper {
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, u64, usize)>>,
    pushed: u64,
}

impl BinaryHeapWrapper {
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a node with the given distance
    pub fn push(&mut self, node: usize, distance: f64) {
        self.heap
            .push(Reverse((OrderedFloat(distance), self.pushed, node)));
        self.pushed += 1;
    }

    /// Removes the node with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, f64)> {
        self.heap
            .pop()
            .map(|Reverse((distance, _, node))| (node, distance.into_inner()))
    }
}
