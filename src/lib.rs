//! # semnet — Semantic Triple Graph with Path Search
//!
//! A small in-memory labeled directed graph engine. Nodes are uniquely
//! labeled strings, arcs are verb-labeled directed edges, and the whole
//! thing models (subject, relation, object) triples.
//!
//! ## Design Principles
//!
//! 1. **Index-stable model**: nodes are addressed by `NodeId`, valid for the
//!    graph's entire lifetime (no deletion, no renaming)
//! 2. **Build once, query many**: a loader populates the graph append-only,
//!    then callers issue independent, self-contained path queries
//! 3. **Empty means empty**: invalid indices, unreachable targets, and
//!    exhausted allocations all degrade to an empty path, never a panic
//! 4. **Harness at arm's length**: loading, synthetic generation, and the
//!    latency harness only ever touch the query surface
//!
//! ## Quick Start
//!
//! ```rust
//! use semnet::{Graph, loader};
//!
//! let mut graph = Graph::new();
//! loader::load_str("cat eh animal\ndog eh animal\nanimal e ser_vivo\n", &mut graph).unwrap();
//! graph.add_hierarchical_verb("eh");
//! graph.add_hierarchical_verb("e");
//!
//! let cat = graph.resolve("cat").unwrap();
//! let ser_vivo = graph.resolve("ser_vivo").unwrap();
//!
//! // Plain BFS walks every arc; the hierarchical search collapses
//! // the eh/e chain into a single logical step.
//! assert_eq!(graph.bfs(cat, ser_vivo).len(), 3);
//! assert_eq!(graph.hierarchical(cat, ser_vivo), vec![cat, ser_vivo]);
//! ```
//!
//! ## Search Algorithms
//!
//! | Algorithm | Entry point | Frontier |
//! |-----------|-------------|----------|
//! | BFS | [`Graph::bfs`] | FIFO, minimum hop count |
//! | Hierarchical BFS | [`Graph::hierarchical`] | FIFO, two-hop verb chains collapsed |
//! | Dijkstra | [`Graph::dijkstra`] | Priority by (distance, node), unit weights |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod search;
pub mod loader;
pub mod export;
pub mod synth;
pub mod bench;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Node, NodeId, Arc};

// ============================================================================
// Re-exports: Graph aggregate
// ============================================================================

pub use graph::Graph;

// ============================================================================
// Re-exports: Harness
// ============================================================================

pub use loader::LoadStats;
pub use synth::SynthConfig;
pub use bench::LatencyStats;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
