#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Graph Coloring Environment
//!
//! An episodic, single-agent environment for the graph coloring problem,
//! meant to be driven one action at a time by an external agent (a policy,
//! a search procedure, a human).
//!
//! Nodes are colored in index order. At each step the agent picks a color for
//! the current node among the colors not already used by one of its colored
//! neighbours. The episode ends when every node has a color, and the final
//! reward is minus the number of distinct colors used.
//!
//! ## Key Components
//!
//! -   [`GraphColoring`]: the transition engine. `reset` and `step` are pure:
//!     they take a [`State`] and return a new one, never keeping anything
//!     between calls.
//! -   [`State`] and [`Observation`]: the authoritative episode data and its
//!     agent-visible projection, including the derived action mask.
//! -   [`Generator`]: where graphs come from, e.g. [`RandomGenerator`] for
//!     Erdős–Rényi graphs or [`dimacs`] files through [`FixedGenerator`].
//! -   [`BatchEnv`]: many independent episodes stepped element-wise.
//!
//! ## Usage
//!
//! ```rust
//! use coloring::{Graph, GraphColoring};
//!
//! let engine = GraphColoring::new(4)?;
//! let (mut state, obs) = engine.reset(Graph::cycle(4)?);
//! assert_eq!(obs.action_mask, vec![true; 4]);
//!
//! for color in [0, 1, 0, 1] {
//!     let t = engine.step(&state, color)?;
//!     state = t.state;
//!     if t.terminated {
//!         assert_eq!(t.reward, -2);
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod batch;
pub mod color;
pub mod config;
pub mod dimacs;
pub mod env;
pub mod error;
pub mod generator;
pub mod graph;
pub mod mask;
pub mod observation;
pub mod specs;
pub mod state;

pub use batch::{BatchEnv, BatchSizeMismatch};
pub use color::{Color, UNASSIGNED};
pub use config::EnvConfig;
pub use env::{GraphColoring, Transition};
pub use error::{ConfigError, EnvError, InvalidReason};
pub use generator::{FixedGenerator, Generator, RandomGenerator};
pub use graph::Graph;
pub use mask::action_mask;
pub use observation::Observation;
pub use specs::{ActionSpec, ObservationSpec};
pub use state::State;
