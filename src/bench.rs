//! Latency harness — repeated-query timing with summary statistics.
//!
//! Drives the query surface with batches of (start, end) pairs, measures
//! each call on the monotonic clock, and reports per-algorithm latency
//! distributions the way a load test wants them: mean, sample standard
//! deviation, min and max, all in nanoseconds.
//!
//! Run benchmarks against release builds; debug timings are not meaningful.

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::model::NodeId;
use crate::Result;

// ============================================================================
// Statistics
// ============================================================================

/// Latency distribution of one measured batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatencyStats {
    pub samples: usize,
    pub mean_ns: f64,
    /// Sample standard deviation (n - 1 denominator); 0 for fewer than two
    /// samples.
    pub std_dev_ns: f64,
    pub min_ns: u64,
    pub max_ns: u64,
}

impl LatencyStats {
    pub fn from_samples(samples: &[u64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let n = samples.len();
        let mean = samples.iter().sum::<u64>() as f64 / n as f64;
        let std_dev = if n > 1 {
            let sum_sq: f64 = samples.iter().map(|&s| (s as f64 - mean).powi(2)).sum();
            (sum_sq / (n - 1) as f64).sqrt()
        } else {
            0.0
        };

        Self {
            samples: n,
            mean_ns: mean,
            std_dev_ns: std_dev,
            min_ns: *samples.iter().min().expect("samples is non-empty"),
            max_ns: *samples.iter().max().expect("samples is non-empty"),
        }
    }
}

/// Time `iterations` calls of `f` and summarize them.
pub fn measure<F: FnMut()>(iterations: usize, mut f: F) -> LatencyStats {
    let mut samples = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let started = Instant::now();
        f();
        samples.push(started.elapsed().as_nanos() as u64);
    }
    LatencyStats::from_samples(&samples)
}

// ============================================================================
// Search benchmarks
// ============================================================================

/// Which query-surface entry point a benchmark drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchAlgo {
    Bfs,
    Hierarchical,
    Dijkstra,
}

/// Draw `count` random (start, end) query pairs over the graph's id range.
pub fn random_queries(graph: &Graph, count: usize, seed: u64) -> Vec<(NodeId, NodeId)> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (NodeId(rng.gen_range(0..n)), NodeId(rng.gen_range(0..n))))
        .collect()
}

/// Run every query through one algorithm, timing each call.
pub fn run_search_benchmark(
    graph: &Graph,
    queries: &[(NodeId, NodeId)],
    algo: SearchAlgo,
) -> LatencyStats {
    let mut samples = Vec::with_capacity(queries.len());
    for &(start, end) in queries {
        let started = Instant::now();
        match algo {
            SearchAlgo::Bfs => {
                graph.bfs(start, end);
            }
            SearchAlgo::Hierarchical => {
                graph.hierarchical(start, end);
            }
            SearchAlgo::Dijkstra => {
                graph.dijkstra(start, end);
            }
        }
        samples.push(started.elapsed().as_nanos() as u64);
    }

    let stats = LatencyStats::from_samples(&samples);
    tracing::debug!(
        ?algo,
        samples = stats.samples,
        mean_ns = stats.mean_ns,
        std_dev_ns = stats.std_dev_ns,
        "search benchmark complete"
    );
    stats
}

// ============================================================================
// Full report
// ============================================================================

/// One benchmark pass over all three algorithms with a shared query batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BenchReport {
    pub nodes: usize,
    pub arcs: usize,
    pub bfs: LatencyStats,
    pub hierarchical: LatencyStats,
    pub dijkstra: LatencyStats,
}

impl BenchReport {
    /// Benchmark all three algorithms over `query_count` random pairs.
    pub fn run(graph: &Graph, query_count: usize, seed: u64) -> Self {
        let queries = random_queries(graph, query_count, seed);
        Self {
            nodes: graph.node_count(),
            arcs: graph.arc_count(),
            bfs: run_search_benchmark(graph, &queries, SearchAlgo::Bfs),
            hierarchical: run_search_benchmark(graph, &queries, SearchAlgo::Hierarchical),
            dijkstra: run_search_benchmark(graph, &queries, SearchAlgo::Dijkstra),
        }
    }

    /// Render the report as pretty-printed JSON for programmatic consumers.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader;

    #[test]
    fn test_stats_from_known_samples() {
        let stats = LatencyStats::from_samples(&[10, 20, 30]);

        assert_eq!(stats.samples, 3);
        assert!((stats.mean_ns - 20.0).abs() < f64::EPSILON);
        assert!((stats.std_dev_ns - 10.0).abs() < 1e-9);
        assert_eq!(stats.min_ns, 10);
        assert_eq!(stats.max_ns, 30);
    }

    #[test]
    fn test_stats_degenerate_inputs() {
        assert_eq!(LatencyStats::from_samples(&[]), LatencyStats::default());

        let single = LatencyStats::from_samples(&[42]);
        assert_eq!(single.samples, 1);
        assert_eq!(single.std_dev_ns, 0.0);
        assert_eq!(single.min_ns, 42);
        assert_eq!(single.max_ns, 42);
    }

    #[test]
    fn test_measure_counts_iterations() {
        let mut calls = 0;
        let stats = measure(5, || calls += 1);

        assert_eq!(calls, 5);
        assert_eq!(stats.samples, 5);
    }

    #[test]
    fn test_random_queries_stay_in_range() {
        let mut g = Graph::new();
        loader::load_str("cat eh animal\ndog eh animal\n", &mut g).unwrap();

        let queries = random_queries(&g, 100, 3);
        assert_eq!(queries.len(), 100);
        assert!(queries.iter().all(|(s, e)| s.0 < 3 && e.0 < 3));

        assert!(random_queries(&Graph::new(), 10, 3).is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let mut g = Graph::new();
        loader::load_str("cat eh animal\ndog eh animal\n", &mut g).unwrap();

        let report = BenchReport::run(&g, 10, 0);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"bfs\""));
        assert!(json.contains("\"dijkstra\""));
        assert_eq!(report.nodes, 3);
        assert_eq!(report.arcs, 2);
    }
}
