//! # Chroma
//!
//! Entry point for the `chroma` binary: rolls out graph coloring episodes on
//! random or DIMACS graphs with a baseline policy and reports the number of
//! colors used.

use anyhow::Result;
use chroma::{app, cli::Args};
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();
    app::run(&args)
}
