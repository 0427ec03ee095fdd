//! Node in the triple graph.

use serde::{Deserialize, Serialize};

/// Index of a node in the graph's node table.
///
/// Stable for the graph's lifetime: nodes are never deleted or renamed,
/// so a `NodeId` obtained once stays valid for every later query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled node. The label is unique across the graph, enforced on
/// insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub label: String,
}

impl Node {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}
