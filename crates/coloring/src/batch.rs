use crate::env::{GraphColoring, Transition};
use crate::error::EnvError;
use crate::graph::Graph;
use crate::observation::Observation;
use crate::state::State;
use std::sync::Arc;

/// A set of independent episodes advanced together.
///
/// Nothing is shared between the episodes beyond the engine configuration;
/// stepping the batch is the same as stepping each state on its own.
#[derive(Debug, Clone)]
pub struct BatchEnv {
    engine: GraphColoring,
    states: Vec<State>,
}

impl BatchEnv {
    #[must_use]
    pub fn new(engine: GraphColoring) -> Self {
        Self {
            engine,
            states: Vec::new(),
        }
    }

    /// Replaces the batch with one fresh episode per graph.
    pub fn reset<I, G>(&mut self, graphs: I) -> Vec<Observation>
    where
        I: IntoIterator<Item = G>,
        G: Into<Arc<Graph>>,
    {
        let (states, observations): (Vec<State>, Vec<Observation>) = graphs
            .into_iter()
            .map(|graph| self.engine.reset(graph))
            .unzip();
        self.states = states;
        observations
    }

    /// Steps episode `i` with `actions[i]`. An element that fails keeps its
    /// previous state and reports the error in its slot.
    ///
    /// # Errors
    ///
    /// Returns [`BatchSizeMismatch`] when `actions.len()` differs from the
    /// batch size; no episode is stepped in that case.
    pub fn step(
        &mut self,
        actions: &[usize],
    ) -> Result<Vec<Result<Transition, EnvError>>, BatchSizeMismatch> {
        if actions.len() != self.states.len() {
            return Err(BatchSizeMismatch {
                expected: self.states.len(),
                actual: actions.len(),
            });
        }
        let results: Vec<_> = self
            .states
            .iter()
            .zip(actions)
            .map(|(state, &action)| self.engine.step(state, action))
            .collect();
        for (state, result) in self.states.iter_mut().zip(&results) {
            if let Ok(transition) = result {
                *state = transition.state.clone();
            }
        }
        Ok(results)
    }

    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// `true` once every episode in the batch has terminated.
    #[must_use]
    pub fn all_terminated(&self) -> bool {
        self.states.iter().all(State::is_terminal)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected {expected} actions, got {actual}")]
pub struct BatchSizeMismatch {
    pub expected: usize,
    pub actual: usize,
}
