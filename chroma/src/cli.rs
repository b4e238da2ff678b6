//! Command-line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "chroma", about = "Roll out graph coloring episodes with a baseline policy")]
pub struct Args {
    /// Named preset to start from (`v0`, `tiny`).
    #[arg(long, default_value = "v0")]
    pub preset: String,

    /// JSON config file; its values replace the preset's.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of nodes of generated graphs.
    #[arg(long)]
    pub nodes: Option<usize>,

    /// Edge probability of generated graphs, in (0, 1).
    #[arg(long)]
    pub connectivity: Option<f64>,

    /// Color budget. Defaults to the number of nodes.
    #[arg(long)]
    pub colors: Option<usize>,

    /// Load the graph from a DIMACS .col file instead of generating graphs.
    #[arg(long)]
    pub dimacs: Option<PathBuf>,

    #[arg(long, default_value_t = 1)]
    pub episodes: usize,

    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    #[arg(long, value_enum, default_value_t = PolicyKind::Greedy)]
    pub policy: PolicyKind,

    /// Print the final observation of the last episode as JSON.
    #[arg(long)]
    pub print_observation: bool,

    /// Log every step.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    /// Lowest legal color.
    Greedy,
    /// Uniform over legal colors.
    Random,
}
