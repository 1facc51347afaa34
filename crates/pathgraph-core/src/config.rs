//! Graph configuration for pathgraph
//!
//! Defaults for omitted edge costs and node heuristics live here rather
//! than in module-level constants, so every graph carries its own.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::Cost;

pub use types::GraphConfig;

impl GraphConfig {
    /// Check that both defaults are usable as costs
    pub fn validate(&self) -> Result<()> {
        self.edge_cost()?;
        self.heuristic_cost()?;
        Ok(())
    }

    /// Default edge cost as a validated [`Cost`]
    pub fn edge_cost(&self) -> Result<Cost> {
        Cost::new(self.default_edge_cost)
            .map_err(|_| GraphError::invalid_value("default_edge_cost", self.default_edge_cost))
    }

    /// Default heuristic cost as a validated [`Cost`]
    pub fn heuristic_cost(&self) -> Result<Cost> {
        Cost::new(self.default_heuristic_cost).map_err(|_| {
            GraphError::invalid_value(
                "default_heuristic_cost",
                self.default_heuristic_cost,
            )
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GraphConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    #[tracing::instrument(fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            default_edge_cost = config.default_edge_cost,
            default_heuristic_cost = config.default_heuristic_cost,
            "config_loaded"
        );
        Ok(config)
    }
}
