//! Shape and bound descriptions of observations and actions, so a driver can
//! size its buffers and sanity-check what it receives.

use crate::color::Color;
use crate::observation::Observation;
use serde::{Deserialize, Serialize};

/// Bounds of every [`Observation`] field for a given graph size and color budget.
///
/// - `graph`: bool, shape `(num_nodes, num_nodes)`, symmetric, diagonal false
/// - `colors`: int, shape `(num_nodes,)`, values in `-1..max_colors`
/// - `action_mask`: bool, shape `(max_colors,)`
/// - `current_node_index`: int in `0..=num_nodes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationSpec {
    pub num_nodes: usize,
    pub max_colors: usize,
}

impl ObservationSpec {
    #[must_use]
    pub fn new(num_nodes: usize, max_colors: usize) -> Self {
        Self {
            num_nodes,
            max_colors,
        }
    }

    #[must_use]
    pub fn graph_shape(&self) -> (usize, usize) {
        (self.num_nodes, self.num_nodes)
    }

    #[must_use]
    pub fn colors_shape(&self) -> usize {
        self.num_nodes
    }

    #[must_use]
    pub fn action_mask_shape(&self) -> usize {
        self.max_colors
    }

    /// `true` when `obs` has the declared shapes and every value is in bounds.
    #[must_use]
    pub fn contains(&self, obs: &Observation) -> bool {
        let n = self.num_nodes;
        let graph_ok = obs.graph.num_nodes() == n
            && (0..n).all(|a| {
                !obs.graph.has_edge(a, a)
                    && (a + 1..n).all(|b| obs.graph.has_edge(a, b) == obs.graph.has_edge(b, a))
            });
        let colors_ok = obs.colors.len() == n
            && obs.colors.iter().all(|c| match c {
                Color::Unassigned => true,
                Color::Assigned(k) => *k < self.max_colors,
            });
        graph_ok
            && colors_ok
            && obs.action_mask.len() == self.max_colors
            && obs.current_node_index <= n
    }
}

/// Discrete action space `0..num_values`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    pub num_values: usize,
}

impl ActionSpec {
    #[must_use]
    pub fn new(num_values: usize) -> Self {
        Self { num_values }
    }

    #[must_use]
    pub fn contains(&self, action: usize) -> bool {
        action < self.num_values
    }
}
