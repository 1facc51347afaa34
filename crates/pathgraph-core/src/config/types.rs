//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Graph configuration
///
/// Holds the defaults applied when a caller omits an edge cost or node
/// attributes. Loaded from TOML, e.g.
///
/// ```toml
/// default_edge_cost = 1.0
/// default_heuristic_cost = 0.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    /// Cost given to an edge added without an explicit cost
    #[serde(default = "default_edge_cost")]
    pub default_edge_cost: f64,

    /// Heuristic cost given to nodes created without attributes
    #[serde(default)]
    pub default_heuristic_cost: f64,
}

fn default_edge_cost() -> f64 {
    1.0
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_edge_cost: default_edge_cost(),
            default_heuristic_cost: 0.0,
        }
    }
}
