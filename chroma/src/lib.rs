//! # Chroma: graph coloring as a sequential decision problem
//!
//! ## Overview
//!
//! Chroma turns graph coloring into an episodic environment. An agent colors
//! the nodes of a graph one at a time, in index order, and is only ever
//! offered colors that do not clash with an already-colored neighbour. When
//! the last node is colored the agent receives minus the number of distinct
//! colors it used, so fewer colors is better.
//!
//! ## Project Architecture
//!
//! -   **`chroma`:** this crate. The command-line driver and the
//!     documentation entry point.
//! -   **[`coloring`]:** the environment itself. Graphs, states, the action
//!     mask, the pure `reset`/`step` transition engine, observation and action
//!     specs, graph generators, presets, DIMACS loading and batched stepping.
//! -   **[`rl`]:** agent-side helpers. A stateful gym-style `Env` wrapper,
//!     baseline policies and an episode runner.
//!
//! ## Getting Started
//!
//! ```text
//! chroma --preset tiny --episodes 10 --policy random
//! chroma --dimacs myciel3.col --colors 6 --print-observation
//! ```

pub mod app;
pub mod cli;

pub use coloring;
pub use rl;
