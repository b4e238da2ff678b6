//! Environment configuration and named presets.
//!
//! Presets are plain constructor functions; there is no global registry.

use crate::env::GraphColoring;
use crate::error::ConfigError;
use crate::generator::RandomGenerator;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Number of nodes of generated graphs.
    pub num_nodes: usize,
    /// Edge probability of the random generator, in (0, 1).
    pub percent_connected: f64,
    /// Color budget `K`. Defaults to `num_nodes`, which can color any graph.
    #[serde(default)]
    pub max_colors: Option<usize>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::v0()
    }
}

impl EnvConfig {
    /// Default preset: 100 nodes, 80% connectivity, one color per node.
    #[must_use]
    pub fn v0() -> Self {
        Self {
            num_nodes: 100,
            percent_connected: 0.8,
            max_colors: None,
        }
    }

    /// Small preset handy for debugging and quick experiments.
    #[must_use]
    pub fn tiny() -> Self {
        Self {
            num_nodes: 20,
            percent_connected: 0.5,
            max_colors: None,
        }
    }

    /// Looks up a preset by name.
    #[must_use]
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "v0" | "default" => Some(Self::v0()),
            "tiny" => Some(Self::tiny()),
            _ => None,
        }
    }

    /// Parses a JSON config such as
    /// `{"num_nodes": 50, "percent_connected": 0.3, "max_colors": 12}`.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or when [`EnvConfig::validate`] rejects the values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn max_colors(&self) -> usize {
        self.max_colors.unwrap_or(self.num_nodes)
    }

    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: zero or too many nodes, zero
    /// colors or a connectivity outside (0, 1).
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator()?;
        self.engine()?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroColors`] if the resolved budget is zero.
    pub fn engine(&self) -> Result<GraphColoring, ConfigError> {
        GraphColoring::new(self.max_colors())
    }

    /// # Errors
    ///
    /// See [`RandomGenerator::new`].
    pub fn generator(&self) -> Result<RandomGenerator, ConfigError> {
        RandomGenerator::new(self.num_nodes, self.percent_connected)
    }
}
