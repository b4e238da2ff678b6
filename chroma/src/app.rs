//! # Chroma Application Logic
//!
//! Builds an environment from the command line, plays the requested number of
//! episodes with a baseline policy and reports how many colors were needed.
//!
//! The configuration is layered: a named preset, then an optional JSON
//! config file, then individual flags. With `--dimacs` every episode uses the
//! graph from that file instead of a freshly generated one.

use crate::cli::{Args, PolicyKind};
use anyhow::{bail, Context, Result};
use coloring::{dimacs, EnvConfig, FixedGenerator, Generator, GraphColoring};
use rl::{run_episode, ColoringEnv, EpisodeStats, GreedyPolicy, Policy, RandomPolicy};
use tracing::Level;

/// Outcome of a run.
#[derive(Debug)]
pub struct Summary {
    pub episodes: Vec<EpisodeStats>,
}

impl Summary {
    /// Fewest colors used by any episode.
    #[must_use]
    pub fn best(&self) -> Option<usize> {
        self.episodes.iter().map(|e| e.colors_used).min()
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_colors(&self) -> Option<f64> {
        if self.episodes.is_empty() {
            return None;
        }
        let total: usize = self.episodes.iter().map(|e| e.colors_used).sum();
        Some(total as f64 / self.episodes.len() as f64)
    }
}

/// Preset, then config file, then flags.
///
/// # Errors
///
/// Fails on an unknown preset, an unreadable or invalid config file, or
/// values rejected by [`EnvConfig::validate`].
pub fn resolve_config(args: &Args) -> Result<EnvConfig> {
    let mut config = match EnvConfig::preset(&args.preset) {
        Some(config) => config,
        None => bail!("unknown preset '{}' (expected v0 or tiny)", args.preset),
    };
    if let Some(path) = &args.config {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        config = EnvConfig::from_json(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
    }
    if let Some(nodes) = args.nodes {
        config.num_nodes = nodes;
    }
    if let Some(p) = args.connectivity {
        config.percent_connected = p;
    }
    if args.colors.is_some() {
        config.max_colors = args.colors;
    }
    config.validate().context("invalid environment configuration")?;
    Ok(config)
}

/// Plays `args.episodes` episodes and collects their stats.
///
/// # Errors
///
/// Returns configuration and DIMACS loading errors, and any environment error
/// raised during an episode (e.g. the color budget running out).
pub fn run_episodes(args: &Args) -> Result<Summary> {
    let config = resolve_config(args)?;
    if let Some(path) = &args.dimacs {
        let graph = dimacs::parse_file(path)
            .with_context(|| format!("loading DIMACS graph {}", path.display()))?;
        tracing::info!(
            nodes = graph.num_nodes(),
            edges = graph.num_edges(),
            max_degree = graph.max_degree(),
            "loaded {}",
            path.display()
        );
        let max_colors = config.max_colors.unwrap_or(graph.num_nodes());
        let engine = GraphColoring::new(max_colors)?;
        let env = ColoringEnv::new(engine, FixedGenerator::new(graph), args.seed);
        play(env, args)
    } else {
        tracing::info!(
            nodes = config.num_nodes,
            connectivity = config.percent_connected,
            max_colors = config.max_colors(),
            "generating random graphs"
        );
        play(ColoringEnv::from_config(&config, args.seed)?, args)
    }
}

fn play<G: Generator>(mut env: ColoringEnv<G>, args: &Args) -> Result<Summary> {
    match args.policy {
        PolicyKind::Greedy => play_with(&mut env, &mut GreedyPolicy, args.episodes),
        PolicyKind::Random => {
            play_with(&mut env, &mut RandomPolicy::new(args.seed), args.episodes)
        }
    }
}

fn play_with<G: Generator, P: Policy>(
    env: &mut ColoringEnv<G>,
    policy: &mut P,
    episodes: usize,
) -> Result<Summary> {
    let mut stats = Vec::with_capacity(episodes);
    for episode in 0..episodes {
        let result = run_episode(env, policy)
            .with_context(|| format!("episode {episode} failed"))?;
        tracing::info!(
            episode,
            colors_used = result.colors_used,
            reward = result.episode_return,
            "episode complete"
        );
        stats.push(result);
    }
    Ok(Summary { episodes: stats })
}

/// Entry point used by `main`: installs logging, runs, prints the summary.
///
/// # Errors
///
/// Returns any error from [`run_episodes`] or from JSON serialization.
pub fn run(args: &Args) -> Result<()> {
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let summary = run_episodes(args)?;
    if let (Some(best), Some(mean)) = (summary.best(), summary.mean_colors()) {
        println!(
            "episodes: {}  best: {best} colors  mean: {mean:.2} colors",
            summary.episodes.len()
        );
    }
    if args.print_observation {
        if let Some(last) = summary.episodes.last() {
            println!("{}", serde_json::to_string(&last.final_observation)?);
        }
    }
    Ok(())
}
