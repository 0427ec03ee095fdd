//! Synthetic graph generation for load testing.
//!
//! Builds graphs of controlled size over a fixed label pool, with arcs drawn
//! uniformly at random. Generation is seeded, so a benchmark run is
//! reproducible end to end.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// Parameters for one generated graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Number of arcs to draw.
    pub arc_count: usize,
    /// Verb pool arcs are labeled from, hierarchical and plain alike.
    pub verbs: Vec<String>,
    /// Subset of the pool registered as hierarchical on the generated graph.
    pub hierarchical_verbs: Vec<String>,
    /// RNG seed; the same seed and inputs reproduce the same graph.
    pub seed: u64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            arc_count: 50,
            verbs: ["eh", "e", "faz", "vive", "come", "monta", "caça", "minera", "vale", "roubou", "ama", "dirige"]
                .map(String::from)
                .to_vec(),
            hierarchical_verbs: vec!["eh".to_string(), "e".to_string()],
            seed: 0,
        }
    }
}

impl SynthConfig {
    /// A config drawing `arc_count` arcs from the default verb pool.
    pub fn with_arc_count(arc_count: usize) -> Self {
        Self { arc_count, ..Self::default() }
    }
}

/// Generate a graph over `labels` with `config.arc_count` random arcs.
///
/// Self-loops are skipped and redrawn. With fewer than two labels or an
/// empty verb pool there is nothing to draw between, so the result carries
/// the nodes and no arcs.
pub fn generate(labels: &[&str], config: &SynthConfig) -> Graph {
    let mut graph = Graph::new();

    for verb in &config.hierarchical_verbs {
        graph.add_hierarchical_verb(verb.clone());
    }
    for label in labels {
        graph.add_node(*label);
    }

    if graph.node_count() < 2 || config.verbs.is_empty() {
        tracing::debug!(nodes = graph.node_count(), "synth: too small to draw arcs");
        return graph;
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut drawn = 0;
    while drawn < config.arc_count {
        let from = rng.gen_range(0..labels.len());
        let to = rng.gen_range(0..labels.len());
        if from == to {
            continue;
        }
        let verb = &config.verbs[rng.gen_range(0..config.verbs.len())];
        graph.add_arc(labels[from], verb.clone(), labels[to]);
        drawn += 1;
    }

    tracing::debug!(
        nodes = graph.node_count(),
        arcs = graph.arc_count(),
        seed = config.seed,
        "synth: graph generated"
    );
    graph
}

// ============================================================================
// Tests
// ============================================================================
