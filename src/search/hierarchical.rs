//! Breadth-first search with hierarchical two-hop inference.
//!
//! On top of the ordinary one-hop expansion, every expansion also looks one
//! arc further: a neighbor reached through any arc exposes its own outgoing
//! arcs, and each second-hop target reached through a hierarchical verb is
//! enqueued directly — parented to the record being expanded, two logical
//! hops away, with the intermediate node bypassed in the parent chain.
//!
//! The collapse is exactly two hops deep. Longer chains of hierarchical
//! verbs shrink pairwise per expansion, not transitively in one step.

use crate::graph::Graph;
use crate::model::NodeId;

use super::{try_filled, TraversalQueue, VisitArena};

/// Minimum-logical-hop path from `start` to `end`, counting collapsed
/// two-hop chains as one step.
///
/// Contract matches [`super::bfs::shortest_path`]: empty on out-of-range
/// ids or no path, `[start]` when `start == end`. Visited-marking is shared
/// and uniform across both expansion rules, so no node is enqueued twice
/// regardless of which rule discovers it first.
pub fn shortest_path(graph: &Graph, start: NodeId, end: NodeId) -> Vec<NodeId> {
    let n = graph.node_count();
    if start.0 >= n || end.0 >= n {
        tracing::debug!(%start, %end, nodes = n, "hierarchical bfs: index out of range");
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
            tracing::debug!(%start, %end, hops = record.dist, "hierarchical bfs: path found");
            return arena.reconstruct(current);
        }

        for arc in graph.arcs_from(record.node) {
            // Ordinary one-hop rule, independent of the arc's verb.
            if !visited[arc.dst.0] {
                visited[arc.dst.0] = true;
                let next = arena.push(arc.dst, Some(current), record.dist + 1);
                queue.push(next);
            }

            // Two-hop inference: look through the neighbor regardless of how
            // it was reached; only the second arc must carry a hierarchical
            // verb. The intermediate node is bypassed in the parent chain.
            for sub in graph.arcs_from(arc.dst) {
                if graph.is_hierarchical(&sub.verb) && !visited[sub.dst.0] {
                    visited[sub.dst.0] = true;
                    let next = arena.push(sub.dst, Some(current), record.dist + 2);
                    queue.push(next);
                }
            }
        }
    }

    tracing::debug!(%start, %end, "hierarchical bfs: no path");
    Vec::new()
}

// ============================================================================
// Tests
// ============================================================================
