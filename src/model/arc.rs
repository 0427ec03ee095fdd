//! Arc (directed, verb-labeled edge) in the triple graph.

use serde::{Deserialize, Serialize};
use super::NodeId;

/// A directed edge from `src` to `dst`, labeled with a relation verb.
///
/// Multiple arcs may connect the same ordered pair of nodes as long as the
/// verbs differ. No reverse arc is implied or stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arc {
    pub src: NodeId,
    pub dst: NodeId,
    pub verb: String,
}

impl Arc {
    pub fn new(src: NodeId, dst: NodeId, verb: impl Into<String>) -> Self {
        Self { src, dst, verb: verb.into() }
    }
}
