//! Depth-first visitation order over the cell adjacency graph.

use std::collections::BTreeSet;

use coverage_cells_core::CellId;

use crate::adjacency::AdjacencyGraph;

/// Depth-first visitation order starting at `start`.
///
/// Iterative with an explicit stack, so deep graphs cannot blow the call
/// stack. Cells are marked visited when pushed, never queued twice, and
/// neighbors are explored smallest id first, so the order is fully
/// deterministic for a given graph.
///
/// Only the connected component reachable from `start` is visited; with
/// a disconnected graph the caller re-runs the traversal per component.
/// A `start` unknown to the graph yields just `[start]` — callers that
/// need stricter handling validate membership first.
pub fn depth_first_order(graph: &AdjacencyGraph, start: CellId) -> Vec<CellId> {
    let mut order = Vec::new();
    let mut visited = BTreeSet::new();
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(cell) = stack.pop() {
        order.push(cell);
        let Some(neighbors) = graph.neighbors(cell) else {
            continue;
        };
        // Reverse push order: the smallest unvisited neighbor ends up on
        // top of the stack.
        for &next in neighbors.iter().rev() {
            if visited.insert(next) {
                stack.push(next);
            }
        }
    }

    order
}
