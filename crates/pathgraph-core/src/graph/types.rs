use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// Opaque node identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

/// Cost of an edge, a node heuristic, or an accumulated path.
///
/// Always finite and non-negative, which is what makes the total ordering
/// below sound. Addition saturates at `f64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    /// Validate a raw value as a cost
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            crate::bail_invalid!("cost", value);
        }
        Ok(Cost(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost((self.0 + other.0).min(f64::MAX))
    }
}

impl std::iter::Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, |acc, c| acc + c)
    }
}

impl From<u32> for Cost {
    fn from(value: u32) -> Self {
        Cost(value as f64)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Attributes carried by a node
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NodeAttrs {
    /// Estimated remaining cost used to order the search frontier.
    /// Not checked for admissibility.
    pub heuristic_cost: Cost,
    /// Free-form annotation with no role in any algorithm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl NodeAttrs {
    pub fn new(heuristic_cost: Cost) -> Self {
        Self {
            heuristic_cost,
            label: None,
        }
    }

    pub fn with_heuristic(mut self, heuristic_cost: Cost) -> Self {
        self.heuristic_cost = heuristic_cost;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Cost breakdown of walking an explicit node sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PathCost {
    /// Sum of edge costs over consecutive pairs
    pub edge_cost: Cost,
    /// Sum of heuristic costs of every node visited
    pub node_cost: Cost,
}

impl PathCost {
    pub fn total(&self) -> Cost {
        self.edge_cost + self.node_cost
    }
}

/// Result of a successful shortest-path search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    /// Nodes from source to target, both inclusive
    pub nodes: Vec<NodeId>,
    /// Accumulated edge cost along `nodes`
    pub cost: Cost,
    /// Number of nodes finalized before the target was reached
    pub expanded: usize,
}

impl ShortestPath {
    /// Number of edges walked
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}
