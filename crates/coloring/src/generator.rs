//! Sources of problem instances.

use crate::error::ConfigError;
use crate::graph::Graph;
use std::sync::Arc;

/// Produces a graph for each new episode.
pub trait Generator {
    /// Number of nodes of every generated graph.
    fn num_nodes(&self) -> usize;

    fn generate(&self, rng: &mut fastrand::Rng) -> Arc<Graph>;
}

/// Erdős–Rényi `G(n, p)` graphs with `p = percent_connected`.
///
/// Each pair of distinct nodes is joined independently with probability `p`;
/// the result is symmetric and loop-free by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomGenerator {
    num_nodes: usize,
    percent_connected: f64,
}

impl RandomGenerator {
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyGraph`] for zero nodes,
    /// [`ConfigError::TooLarge`] above [`Graph::MAX_NODES`] and
    /// [`ConfigError::InvalidConnectivity`] unless `0 < percent_connected < 1`.
    pub fn new(num_nodes: usize, percent_connected: f64) -> Result<Self, ConfigError> {
        if num_nodes == 0 {
            return Err(ConfigError::EmptyGraph);
        }
        Graph::cell_count(num_nodes)?;
        if !(percent_connected > 0.0 && percent_connected < 1.0) {
            return Err(ConfigError::InvalidConnectivity(percent_connected));
        }
        Ok(Self {
            num_nodes,
            percent_connected,
        })
    }

    #[must_use]
    pub fn percent_connected(&self) -> f64 {
        self.percent_connected
    }
}

impl Generator for RandomGenerator {
    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    fn generate(&self, rng: &mut fastrand::Rng) -> Arc<Graph> {
        // Sample the lower triangle only, then mirror.
        let edges: Vec<(usize, usize)> = (1..self.num_nodes)
            .flat_map(|a| (0..a).map(move |b| (a, b)))
            .filter(|_| rng.f64() < self.percent_connected)
            .collect();
        let graph = Graph::from_edges(self.num_nodes, &edges)
            .unwrap_or_else(|_| unreachable!("size checked in new, edges in range and loop-free"));
        Arc::new(graph)
    }
}

/// Always hands out the same graph, e.g. one loaded from a DIMACS file.
#[derive(Debug, Clone)]
pub struct FixedGenerator {
    graph: Arc<Graph>,
}

impl FixedGenerator {
    #[must_use]
    pub fn new(graph: impl Into<Arc<Graph>>) -> Self {
        Self {
            graph: graph.into(),
        }
    }
}

impl Generator for FixedGenerator {
    fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    fn generate(&self, _rng: &mut fastrand::Rng) -> Arc<Graph> {
        Arc::clone(&self.graph)
    }
}
