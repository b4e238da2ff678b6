//! Undirected, loop-free graphs stored as a dense adjacency matrix.

use crate::error::ConfigError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An immutable N×N symmetric boolean adjacency relation with an empty
/// diagonal.
///
/// Every constructor validates these properties, so a `Graph` value is always
/// well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    num_nodes: usize,
    adj: Vec<bool>, // row-major, num_nodes * num_nodes
}

impl Graph {
    /// Largest node count a dense adjacency matrix is built for.
    pub const MAX_NODES: usize = 1 << 14;

    /// Number of matrix cells for `num_nodes`, or [`ConfigError::TooLarge`].
    pub(crate) fn cell_count(num_nodes: usize) -> Result<usize, ConfigError> {
        num_nodes
            .checked_mul(num_nodes)
            .filter(|_| num_nodes <= Self::MAX_NODES)
            .ok_or(ConfigError::TooLarge { num_nodes })
    }

    /// Builds a graph from an adjacency matrix given as rows.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the matrix is empty, larger than
    /// [`Graph::MAX_NODES`], not square, has a self-loop or is not symmetric.
    pub fn from_adjacency(rows: &[Vec<bool>]) -> Result<Self, ConfigError> {
        let num_nodes = rows.len();
        if num_nodes == 0 {
            return Err(ConfigError::EmptyGraph);
        }
        let mut adj = Vec::with_capacity(Self::cell_count(num_nodes)?);
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != num_nodes {
                return Err(ConfigError::NotSquare {
                    rows: num_nodes,
                    row,
                    len: entries.len(),
                });
            }
            adj.extend_from_slice(entries);
        }
        let graph = Self { num_nodes, adj };
        graph.validate()?;
        Ok(graph)
    }

    /// Builds a graph with `num_nodes` nodes from an undirected edge list.
    /// Repeated edges are merged.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an empty or oversized graph, an edge
    /// touching a node outside `0..num_nodes`, or a self-loop.
    pub fn from_edges(num_nodes: usize, edges: &[(usize, usize)]) -> Result<Self, ConfigError> {
        if num_nodes == 0 {
            return Err(ConfigError::EmptyGraph);
        }
        let mut adj = vec![false; Self::cell_count(num_nodes)?];
        for &(a, b) in edges {
            if a >= num_nodes || b >= num_nodes {
                return Err(ConfigError::EdgeOutOfRange { a, b, num_nodes });
            }
            if a == b {
                return Err(ConfigError::SelfLoop { node: a });
            }
            adj[a * num_nodes + b] = true;
            adj[b * num_nodes + a] = true;
        }
        Ok(Self { num_nodes, adj })
    }

    /// A graph with `num_nodes` nodes and no edges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyGraph`] when `num_nodes` is zero.
    pub fn empty(num_nodes: usize) -> Result<Self, ConfigError> {
        Self::from_edges(num_nodes, &[])
    }

    /// Ring `0-1-…-(n-1)-0`. For `num_nodes == 2` this is a single edge.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyGraph`] when `num_nodes` is zero.
    pub fn cycle(num_nodes: usize) -> Result<Self, ConfigError> {
        let edges: Vec<_> = if num_nodes < 2 {
            Vec::new()
        } else {
            (0..num_nodes).map(|i| (i, (i + 1) % num_nodes)).collect()
        };
        Self::from_edges(num_nodes, &edges)
    }

    /// Every pair of distinct nodes is connected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyGraph`] when `num_nodes` is zero.
    pub fn complete(num_nodes: usize) -> Result<Self, ConfigError> {
        let edges: Vec<_> = (0..num_nodes)
            .flat_map(|a| (a + 1..num_nodes).map(move |b| (a, b)))
            .collect();
        Self::from_edges(num_nodes, &edges)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for a in 0..self.num_nodes {
            if self.has_edge(a, a) {
                return Err(ConfigError::SelfLoop { node: a });
            }
            for b in a + 1..self.num_nodes {
                if self.has_edge(a, b) != self.has_edge(b, a) {
                    return Err(ConfigError::Asymmetric { a, b });
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.adj.iter().filter(|&&e| e).count() / 2
    }

    /// `true` when `a` and `b` are adjacent. Out-of-range indices are never adjacent.
    #[must_use]
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        a < self.num_nodes && b < self.num_nodes && self.adj[a * self.num_nodes + b]
    }

    /// Adjacency row of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node >= num_nodes`.
    #[must_use]
    pub fn row(&self, node: usize) -> &[bool] {
        let start = node * self.num_nodes;
        &self.adj[start..start + self.num_nodes]
    }

    /// Neighbours of `node` in increasing index order.
    pub fn neighbours(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(node)
            .iter()
            .enumerate()
            .filter_map(|(j, &edge)| edge.then_some(j))
    }

    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.row(node).iter().filter(|&&e| e).count()
    }

    /// Largest node degree. `max_degree() + 1` colors always suffice for the
    /// node-by-node greedy order used by the environment.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        (0..self.num_nodes).map(|n| self.degree(n)).max().unwrap_or(0)
    }

    /// The adjacency matrix as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.adj.chunks(self.num_nodes).map(<[bool]>::to_vec).collect()
    }
}

impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_rows().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Graph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<bool>>::deserialize(deserializer)?;
        Graph::from_adjacency(&rows).map_err(serde::de::Error::custom)
    }
}
