//! Topological sorting using Kahn's algorithm.

use super::cycle::find_cycle_among;
use super::RelationGraph;
use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// A node eligible for output, ordered for the priority queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapNode<'g>(&'g str);

impl Ord for HeapNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap (lexically smallest name pops first)
        other.0.cmp(self.0)
    }
}

impl PartialOrd for HeapNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Produce a total order of every node that respects every edge.
///
/// Kahn's algorithm with a min-heap: among the nodes whose predecessors are
/// all placed, the lexically smallest goes next. If nodes remain once the
/// heap drains, they sit on or behind a cycle; a DFS over the leftovers
/// names the exact cycle in the returned [`Error::Cycle`].
pub fn resolve(graph: &RelationGraph) -> Result<Vec<String>> {
    let mut in_degree = graph.in_degrees();

    let mut heap: BinaryHeap<HeapNode> = in_degree
        .iter()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(&node, _)| HeapNode(node))
        .collect();

    let mut order: Vec<String> = Vec::with_capacity(graph.node_count());

    while let Some(HeapNode(node)) = heap.pop() {
        order.push(node.to_string());

        for succ in graph.successors(node) {
            if let Some(degree) = in_degree.get_mut(succ) {
                *degree -= 1;
                if *degree == 0 {
                    heap.push(HeapNode(succ));
                }
            }
        }
    }

    if order.len() < graph.node_count() {
        let leftover: Vec<&str> = in_degree
            .iter()
            .filter(|&(_, &degree)| degree > 0)
            .map(|(&node, _)| node)
            .collect();
        debug!(
            placed = order.len(),
            leftover = leftover.len(),
            "graph is cyclic"
        );

        // Every leftover node reaches a cycle among the leftovers, so the
        // fallback to the full set is never taken on a well-formed graph.
        let members = find_cycle_among(graph, leftover.iter().copied())
            .unwrap_or_else(|| leftover.iter().map(|n| n.to_string()).collect());
        return Err(Error::Cycle { members });
    }

    debug!(nodes = order.len(), "resolved order");
    Ok(order)
}
