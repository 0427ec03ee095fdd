//! Diagnostic dump — serialize a graph back to triple text.
//!
//! `write_triples` produces the same `subject verb object` line format the
//! loader consumes, so a dump can be reloaded into a fresh graph.
//! `write_relations` lists a single node's outgoing relations.

use std::io::Write;

use crate::graph::Graph;
use crate::Result;

/// Write every arc as a `subject verb object` line, in node order.
pub fn write_triples(graph: &Graph, writer: &mut dyn Write) -> Result<()> {
    for label in graph.labels() {
        // Unknown labels are impossible here; the iteration source is the
        // node table itself.
        let Some(relations) = graph.relations_from(label) else {
            continue;
        };
        for (subject, verb, object) in relations {
            writeln!(writer, "{subject} {verb} {object}")?;
        }
    }
    Ok(())
}

/// Write the outgoing relations of the node carrying `label`, one
/// `subject verb object` line each. A label with no node produces a single
/// not-found line.
pub fn write_relations(graph: &Graph, label: &str, writer: &mut dyn Write) -> Result<()> {
    match graph.relations_from(label) {
        Some(relations) => {
            writeln!(writer, "Relations for {label}:")?;
            for (subject, verb, object) in relations {
                writeln!(writer, "{subject} {verb} {object}")?;
            }
        }
        None => {
            writeln!(writer, "Label not found: {label}")?;
        }
    }
    Ok(())
}

/// Write every node label, one per line, in insertion order.
pub fn write_labels(graph: &Graph, writer: &mut dyn Write) -> Result<()> {
    for label in graph.labels() {
        writeln!(writer, "{label}")?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader;

    #[test]
    fn test_write_triples_matches_loader_format() {
        let mut g = Graph::new();
        loader::load_str("cat eh animal\ncat caça mouse\n", &mut g).unwrap();

        let mut out = Vec::new();
        write_triples(&g, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "cat eh animal\ncat caça mouse\n");
    }

    #[test]
    fn test_write_relations_for_unknown_label() {
        let g = Graph::new();
        let mut out = Vec::new();
        write_relations(&g, "ghost", &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Label not found: ghost\n");
    }

    #[test]
    fn test_write_labels_in_insertion_order() {
        let mut g = Graph::new();
        loader::load_str("cat eh animal\ndog eh animal\n", &mut g).unwrap();

        let mut out = Vec::new();
        write_labels(&g, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "cat\nanimal\ndog\n");
    }
}
