//! Transition engine.
//!
//! [`GraphColoring`] holds only configuration (the color budget). Episode data
//! lives in [`State`] values that flow in and out of [`GraphColoring::reset`]
//! and [`GraphColoring::step`]; the engine keeps nothing between calls, so one
//! engine can drive any number of independent episodes, on any thread.

use crate::error::{ConfigError, EnvError};
use crate::graph::Graph;
use crate::mask::{action_mask, check_action};
use crate::observation::Observation;
use crate::specs::{ActionSpec, ObservationSpec};
use crate::state::State;
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of a successful [`GraphColoring::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: State,
    pub observation: Observation,
    /// `0` on every step except the last, where it is minus the number of
    /// distinct colors used.
    pub reward: i64,
    pub terminated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphColoring {
    max_colors: usize,
}

impl GraphColoring {
    /// Creates an engine allowing colors `0..max_colors`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroColors`] when `max_colors` is zero.
    pub fn new(max_colors: usize) -> Result<Self, ConfigError> {
        if max_colors == 0 {
            return Err(ConfigError::ZeroColors);
        }
        Ok(Self { max_colors })
    }

    #[must_use]
    pub fn max_colors(&self) -> usize {
        self.max_colors
    }

    /// Starts an episode on `graph` with every node unassigned.
    pub fn reset(&self, graph: impl Into<Arc<Graph>>) -> (State, Observation) {
        let state = State::initial(graph.into());
        debug!(
            num_nodes = state.num_nodes(),
            max_colors = self.max_colors,
            "reset graph coloring episode"
        );
        let observation = self.observation(&state);
        (state, observation)
    }

    /// Colors the current node with `action`.
    ///
    /// The input state is never modified; on success a new state is returned
    /// inside the [`Transition`].
    ///
    /// # Errors
    ///
    /// - [`EnvError::PostTerminalCall`] if every node is already colored.
    /// - [`ConfigError::ColorsExhausted`] if no color at all is legal for the
    ///   current node, i.e. the color budget is too small for this graph.
    /// - [`EnvError::InvalidAction`] if `action` is out of range or used by an
    ///   already-colored neighbour.
    pub fn step(&self, state: &State, action: usize) -> Result<Transition, EnvError> {
        if state.is_terminal() {
            return Err(EnvError::PostTerminalCall {
                num_nodes: state.num_nodes(),
            });
        }
        let node = state.current_node_index();
        if !action_mask(state, self.max_colors).contains(&true) {
            warn!(node, max_colors = self.max_colors, "no legal color left");
            return Err(ConfigError::ColorsExhausted {
                node,
                max_colors: self.max_colors,
            }
            .into());
        }
        check_action(state, self.max_colors, action)
            .map_err(|reason| EnvError::InvalidAction {
                action,
                node,
                reason,
            })?;

        let next = state.advance(action);
        let terminated = next.is_terminal();
        let reward = if terminated {
            -i64::try_from(next.num_colors_used()).unwrap_or(i64::MAX)
        } else {
            0
        };
        let observation = self.observation(&next);
        debug!(node, action, reward, terminated, "step");
        if !terminated && !observation.action_mask.contains(&true) {
            warn!(
                node = next.current_node_index(),
                max_colors = self.max_colors,
                "episode is stuck: next node has no legal color"
            );
        }
        Ok(Transition {
            state: next,
            observation,
            reward,
            terminated,
        })
    }

    /// Legality mask for the current node of `state`.
    #[must_use]
    pub fn action_mask(&self, state: &State) -> Vec<bool> {
        action_mask(state, self.max_colors)
    }

    #[must_use]
    pub fn observation(&self, state: &State) -> Observation {
        Observation::from_state(state, self.max_colors)
    }

    #[must_use]
    pub fn observation_spec(&self, num_nodes: usize) -> ObservationSpec {
        ObservationSpec::new(num_nodes, self.max_colors)
    }

    #[must_use]
    pub fn action_spec(&self) -> ActionSpec {
        ActionSpec::new(self.max_colors)
    }
}
