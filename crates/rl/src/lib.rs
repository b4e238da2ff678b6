#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Agent-side helpers for the graph coloring environment: a stateful
//! [`Env`] wrapper, simple baseline policies and an episode runner.

pub mod env;
pub mod policy;
pub mod rollout;

pub use env::{features, ColoringEnv, Env};
pub use policy::{GreedyPolicy, Policy, RandomPolicy};
pub use rollout::{run_episode, EpisodeStats};
