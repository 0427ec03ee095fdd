//! Plain breadth-first search: minimum-hop paths over unit-weight arcs.

use crate::graph::Graph;
use crate::model::NodeId;

use super::{try_filled, TraversalQueue, VisitArena};

/// Minimum-hop path from `start` to `end`.
///
/// Returns the empty path when either id is out of range or no path exists;
/// `start == end` yields the singleton `[start]`.
///
/// Neighbors are marked visited at enqueue time, never at dequeue time, so
/// each node enters the frontier at most once and the first time `end` is
/// dequeued its parent chain is a shortest path. Among tied shortest paths
/// the one discovered earliest in adjacency order wins, by FIFO order alone.
pub fn shortest_path(graph: &Graph, start: NodeId, end: NodeId) -> Vec<NodeId> {
    let n = graph.node_count();
    if start.0 >= n || end.0 >= n {
        tracing::debug!(%start, %end, nodes = n, "bfs: index out of range");
        return Vec::new();
    }
    if start == end {
        return vec![start];
    }

    let Some(mut visited) = try_filled(false, n) else {
        return Vec::new();
    };
    let Some(mut arena) = VisitArena::try_with_capacity(n) else {
        return Vec::new();
    };
    let Some(mut queue) = TraversalQueue::try_with_capacity(n) else {
        return Vec::new();
    };

    visited[start.0] = true;
    let root = arena.push(start, None, 0);
    queue.push(root);

    while let Some(current) = queue.pop() {
        let record = *arena.get(current);
        if record.node == end {
            tracing::debug!(%start, %end, hops = record.dist, "bfs: path found");
            return arena.reconstruct(current);
        }

        for arc in graph.arcs_from(record.node) {
            if !visited[arc.dst.0] {
                visited[arc.dst.0] = true;
                let next = arena.push(arc.dst, Some(current), record.dist + 1);
                queue.push(next);
            }
        }
    }

    tracing::debug!(%start, %end, "bfs: no path");
    Vec::new()
}

// ============================================================================
// Tests
// ============================================================================
