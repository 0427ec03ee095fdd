//! Dijkstra relaxation with every arc at unit weight.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::Graph;
use crate::model::NodeId;

use super::try_filled;

/// Distance sentinel for nodes the relaxation has not reached.
const UNREACHED: u32 = u32::MAX;

/// Shortest path from `start` to `end` by priority relaxation.
///
/// Same contract as [`super::bfs::shortest_path`], and since every arc
/// weighs 1 the result always matches plain BFS on hop count. The specific
/// path can differ where several shortest paths tie: the frontier pops by
/// `(tentative distance, node index)` ascending, not FIFO order. Stale heap
/// entries are discarded lazily on pop.
pub fn shortest_path(graph: &Graph, start: NodeId, end: NodeId) -> Vec<NodeId> {
    let n = graph.node_count();
    if start.0 >= n || end.0 >= n {
        tracing::debug!(%start, %end, nodes = n, "dijkstra: index out of range");
        return Vec::new();
    }
    if start == end {
        return vec![start];
    }

    let Some(mut dist) = try_filled(UNREACHED, n) else {
        return Vec::new();
    };
    let Some(mut prev) = try_filled(None::<NodeId>, n) else {
        return Vec::new();
    };
    let mut frontier: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();
    if frontier.try_reserve(n).is_err() {
        return Vec::new();
    }

    dist[start.0] = 0;
    frontier.push(Reverse((0, start)));

    while let Some(Reverse((d, u))) = frontier.pop() {
        if d > dist[u.0] {
            continue; // lazy deletion: a better entry already settled u
        }
        if u == end {
            break;
        }

        for arc in graph.arcs_from(u) {
            let v = arc.dst;
            let candidate = dist[u.0] + 1;
            if candidate < dist[v.0] {
                dist[v.0] = candidate;
                prev[v.0] = Some(u);
                frontier.push(Reverse((candidate, v)));
            }
        }
    }

    if dist[end.0] == UNREACHED {
        tracing::debug!(%start, %end, "dijkstra: no path");
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut cursor = Some(end);
    while let Some(node) = cursor {
        path.push(node);
        cursor = prev[node.0];
    }
    path.reverse();

    tracing::debug!(%start, %end, hops = dist[end.0], "dijkstra: path found");
    path
}

// ============================================================================
// Tests
// ============================================================================
