use crate::color::{self, Color};
use crate::graph::Graph;
use crate::mask::action_mask;
use crate::state::State;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Everything the agent gets to see. There are no hidden fields.
///
/// Serialized as `{"graph": [[bool]], "colors": [int], "action_mask": [bool],
/// "current_node_index": int}` with `-1` marking unassigned colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub graph: Arc<Graph>,
    pub colors: Vec<Color>,
    pub action_mask: Vec<bool>,
    pub current_node_index: usize,
}

impl Observation {
    /// Projects a state and its derived mask into the agent-visible shape.
    #[must_use]
    pub fn from_state(state: &State, max_colors: usize) -> Self {
        Self {
            graph: Arc::clone(state.shared_graph()),
            colors: state.colors().to_vec(),
            action_mask: action_mask(state, max_colors),
            current_node_index: state.current_node_index(),
        }
    }

    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.colors.len()
    }

    /// Distinct colors assigned so far; the negated reward once terminal.
    #[must_use]
    pub fn num_colors_used(&self) -> usize {
        color::count_distinct(&self.colors)
    }

    /// Colors currently allowed for the node being decided.
    pub fn legal_actions(&self) -> impl Iterator<Item = usize> + '_ {
        self.action_mask
            .iter()
            .enumerate()
            .filter_map(|(k, &legal)| legal.then_some(k))
    }

    /// Colors as wire integers (`-1` for unassigned).
    #[must_use]
    pub fn raw_colors(&self) -> Vec<i64> {
        self.colors.iter().map(|c| c.to_raw()).collect()
    }
}
