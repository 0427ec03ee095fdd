//! Triple-stream ingestion.
//!
//! Feeds a stream of `subject verb object` lines into a graph: both
//! endpoint labels are appended as nodes (idempotent) and one directed arc
//! runs from subject to object. The core performs no format validation, so
//! filtering malformed input is this module's job — a line that does not
//! split into exactly three whitespace tokens is skipped and counted, never
//! an error.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::Result;

/// Summary of one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Triples accepted and handed to the graph.
    pub triples: usize,
    /// Non-blank lines filtered out as malformed.
    pub skipped: usize,
}

/// Load whitespace-separated triples from a reader into `graph`.
///
/// Blank lines are ignored. Malformed lines are filtered (see module docs).
/// Arcs whose endpoints fail to resolve are the graph's concern and are
/// silently dropped there; this loader always appends both endpoints first,
/// so its own triples never dangle.
pub fn load_triples<R: BufRead>(reader: R, graph: &mut Graph) -> Result<LoadStats> {
    let mut stats = LoadStats::default();

    for line in reader.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(subject), Some(verb), Some(object), None) => {
                graph.add_node(subject);
                graph.add_node(object);
                graph.add_arc(subject, verb, object);
                stats.triples += 1;
            }
            (None, ..) => {} // blank line
            _ => {
                tracing::warn!(line = line.as_str(), "skipping malformed triple");
                stats.skipped += 1;
            }
        }
    }

    tracing::debug!(
        triples = stats.triples,
        skipped = stats.skipped,
        nodes = graph.node_count(),
        arcs = graph.arc_count(),
        "triple load complete"
    );
    Ok(stats)
}

/// Load triples from an in-memory string. Convenience for tests and small
/// embedded datasets.
pub fn load_str(input: &str, graph: &mut Graph) -> Result<LoadStats> {
    load_triples(input.as_bytes(), graph)
}

// ============================================================================
// Tests
// ============================================================================
