//! # Graph Aggregate
//!
//! The in-memory store: a node table, a per-node adjacency index extended in
//! lockstep with it, and the set of hierarchical verbs.
//!
//! ## Limitations
//!
//! - **No deletion**: nodes and arcs are append-only. That is what makes
//!   `NodeId` stable for the graph's lifetime.
//! - **No interior locking**: mutation takes `&mut self`, queries take
//!   `&self`. Build the graph first, then query it; concurrent read-only
//!   queries against a quiesced graph are safe because every search owns its
//!   own transient state.
//! - **Linear label lookup**: `resolve()` scans the node table. Fine at the
//!   expected scale of tens to low hundreds of nodes.

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::model::{Arc, Node, NodeId};
use crate::search;

/// Per-node outgoing arc list. Most nodes in triple data carry a handful of
/// relations, so a few live inline.
pub type ArcList = SmallVec<[Arc; 4]>;

/// An in-memory semantic triple graph.
///
/// Built append-only by a loader, then treated as read-only by the query
/// surface. See the crate docs for the build-then-query contract.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Insertion-ordered node table; a node's position is its `NodeId`.
    nodes: Vec<Node>,
    /// Outgoing arcs per node, indexed by `NodeId`. Always the same length
    /// as `nodes`.
    adjacency: Vec<ArcList>,
    /// Verbs whose two-hop chains the hierarchical search collapses.
    hierarchical_verbs: HashSet<String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Node table
    // ========================================================================

    /// Number of nodes. Every `NodeId` below this count is valid.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Append a node, unless one with this exact label already exists.
    ///
    /// Returns the id of the node carrying `label`, whether it was just
    /// inserted or already present. A matching empty adjacency list is
    /// appended alongside every new node.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        let label = label.into();
        if let Some(id) = self.resolve(&label) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(label));
        self.adjacency.push(ArcList::new());
        id
    }

    /// Resolve a label to its node id. Linear scan over the node table.
    pub fn resolve(&self, label: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.label == label)
            .map(NodeId)
    }

    /// The label of a node, or `None` for an out-of-range id.
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).map(|n| n.label.as_str())
    }

    /// All node labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.label.as_str())
    }

    // ========================================================================
    // Adjacency index
    // ========================================================================

    /// Total number of arcs across all nodes.
    pub fn arc_count(&self) -> usize {
        self.adjacency.iter().map(|a| a.len()).sum()
    }

    /// Append a directed arc from `from_label` to `to_label`.
    ///
    /// If either label does not resolve to a node, the arc is silently
    /// dropped — ingestion correctness is the loader's responsibility, and
    /// a dangling endpoint is not an error here.
    pub fn add_arc(&mut self, from_label: &str, verb: impl Into<String>, to_label: &str) {
        let (Some(src), Some(dst)) = (self.resolve(from_label), self.resolve(to_label)) else {
            tracing::debug!(from = from_label, to = to_label, "dropping arc with unresolved endpoint");
            return;
        };
        self.adjacency[src.0].push(Arc::new(src, dst, verb));
    }

    /// Outgoing arcs of a node. Empty for an out-of-range id.
    pub fn arcs_from(&self, id: NodeId) -> &[Arc] {
        self.adjacency.get(id.0).map_or(&[], |a| a.as_slice())
    }

    /// Enumerate a node's outgoing `(source, verb, target)` triples for
    /// diagnostic listing. `None` when the label is unknown.
    pub fn relations_from(&self, label: &str) -> Option<Vec<(&str, &str, &str)>> {
        let id = self.resolve(label)?;
        Some(
            self.arcs_from(id)
                .iter()
                .map(|arc| {
                    (
                        self.nodes[arc.src.0].label.as_str(),
                        arc.verb.as_str(),
                        self.nodes[arc.dst.0].label.as_str(),
                    )
                })
                .collect(),
        )
    }

    // ========================================================================
    // Hierarchical verb set
    // ========================================================================

    /// Register a verb as hierarchical. Idempotent.
    pub fn add_hierarchical_verb(&mut self, verb: impl Into<String>) {
        self.hierarchical_verbs.insert(verb.into());
    }

    /// Whether two-hop chains ending in this verb are collapsed by the
    /// hierarchical search.
    pub fn is_hierarchical(&self, verb: &str) -> bool {
        self.hierarchical_verbs.contains(verb)
    }

    // ========================================================================
    // Query surface: path search
    // ========================================================================

    /// Minimum-hop path from `start` to `end`, or empty when either id is
    /// out of range or no path exists. `start == end` yields `[start]`.
    pub fn bfs(&self, start: NodeId, end: NodeId) -> Vec<NodeId> {
        search::bfs::shortest_path(self, start, end)
    }

    /// Like [`Graph::bfs`], but chains of two arcs whose second verb is
    /// hierarchical count as a single logical step, so the returned path can
    /// have fewer entries than the arcs actually traversed.
    pub fn hierarchical(&self, start: NodeId, end: NodeId) -> Vec<NodeId> {
        search::hierarchical::shortest_path(self, start, end)
    }

    /// Dijkstra relaxation with every arc at unit weight. Agrees with
    /// [`Graph::bfs`] on path length; the specific path may differ where
    /// several shortest paths tie.
    pub fn dijkstra(&self, start: NodeId, end: NodeId) -> Vec<NodeId> {
        search::dijkstra::shortest_path(self, start, end)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut g = Graph::new();
        let a = g.add_node("cat");
        let b = g.add_node("cat");

        assert_eq!(a, b);
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn test_resolve_returns_insertion_index() {
        let mut g = Graph::new();
        g.add_node("cat");
        g.add_node("dog");

        assert_eq!(g.resolve("cat"), Some(NodeId(0)));
        assert_eq!(g.resolve("dog"), Some(NodeId(1)));
        assert_eq!(g.resolve("bird"), None);
    }

    #[test]
    fn test_add_arc_with_unresolved_endpoint_is_dropped() {
        let mut g = Graph::new();
        g.add_node("cat");

        g.add_arc("cat", "eh", "animal");
        g.add_arc("animal", "eh", "cat");

        assert_eq!(g.arc_count(), 0);
    }

    #[test]
    fn test_add_arc_goes_only_to_source_list() {
        let mut g = Graph::new();
        let cat = g.add_node("cat");
        let animal = g.add_node("animal");

        g.add_arc("cat", "eh", "animal");

        assert_eq!(g.arcs_from(cat).len(), 1);
        assert_eq!(g.arcs_from(animal).len(), 0);
        assert_eq!(g.arcs_from(cat)[0].dst, animal);
    }

    #[test]
    fn test_parallel_arcs_with_distinct_verbs() {
        let mut g = Graph::new();
        g.add_node("cat");
        g.add_node("mouse");

        g.add_arc("cat", "caça", "mouse");
        g.add_arc("cat", "come", "mouse");

        assert_eq!(g.arc_count(), 2);
    }

    #[test]
    fn test_relations_from_lists_outgoing_triples() {
        let mut g = Graph::new();
        g.add_node("cat");
        g.add_node("animal");
        g.add_node("mouse");
        g.add_arc("cat", "eh", "animal");
        g.add_arc("cat", "caça", "mouse");

        let rels = g.relations_from("cat").unwrap();
        assert_eq!(rels, vec![("cat", "eh", "animal"), ("cat", "caça", "mouse")]);

        assert!(g.relations_from("bird").is_none());
        assert_eq!(g.relations_from("mouse").unwrap(), vec![]);
    }

    #[test]
    fn test_hierarchical_verb_membership() {
        let mut g = Graph::new();
        g.add_hierarchical_verb("eh");
        g.add_hierarchical_verb("eh");

        assert!(g.is_hierarchical("eh"));
        assert!(!g.is_hierarchical("come"));
    }

    #[test]
    fn test_arcs_from_out_of_range_is_empty() {
        let g = Graph::new();
        assert!(g.arcs_from(NodeId(7)).is_empty());
        assert_eq!(g.label(NodeId(7)), None);
    }
}
