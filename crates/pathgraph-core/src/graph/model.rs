//! Graph data model and mutation operations
//!
//! Each undirected edge is stored as two half-edges, one under each
//! endpoint. Only `add_edge`/`delete_edge`/`delete_node` touch the
//! adjacency map, and each of them updates both halves together.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::graph::types::{Cost, NodeAttrs, NodeId, PathCost};

/// In-memory undirected weighted graph
///
/// Nodes and adjacency are kept in ordered maps so neighbors are always
/// visited in id order and equal-cost searches resolve the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: BTreeMap<NodeId, NodeAttrs>,
    edges: BTreeMap<NodeId, BTreeMap<NodeId, Cost>>,
    default_edge_cost: Cost,
    default_heuristic_cost: Cost,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Empty graph with the default configuration
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            default_edge_cost: Cost::from(1),
            default_heuristic_cost: Cost::ZERO,
        }
    }

    /// Empty graph using the defaults from `config`
    pub fn with_config(config: &GraphConfig) -> Result<Self> {
        Ok(Self {
            default_edge_cost: config.edge_cost()?,
            default_heuristic_cost: config.heuristic_cost()?,
            ..Self::new()
        })
    }

    /// Build a graph from a list of edges; `None` costs use the default
    pub fn from_edges<I, N>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, Option<Cost>)>,
        N: Into<NodeId>,
    {
        let mut graph = Self::new();
        for (from, to, cost) in edges {
            graph.add_edge(from, to, cost);
        }
        graph
    }

    fn default_attrs(&self) -> NodeAttrs {
        NodeAttrs::new(self.default_heuristic_cost)
    }

    /// Insert a node.
    ///
    /// With `attrs`, the stored attributes are replaced wholesale (a missing
    /// label clears an existing one). Without, an existing node is left
    /// untouched and a new one gets the default attributes.
    pub fn add_node(&mut self, id: impl Into<NodeId>, attrs: Option<NodeAttrs>) {
        let id = id.into();
        match attrs {
            Some(attrs) => {
                tracing::debug!(node = %id, heuristic_cost = %attrs.heuristic_cost, "add_node");
                self.nodes.insert(id, attrs);
            }
            None => {
                if !self.nodes.contains_key(&id) {
                    tracing::debug!(node = %id, "add_node");
                    let attrs = self.default_attrs();
                    self.nodes.insert(id, attrs);
                }
            }
        }
    }

    /// Connect `from` and `to`, creating missing endpoints.
    ///
    /// An existing edge between the pair has its cost overwritten on both
    /// halves. Self-loops are accepted and stored once.
    pub fn add_edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        cost: Option<Cost>,
    ) {
        let from = from.into();
        let to = to.into();
        let cost = cost.unwrap_or(self.default_edge_cost);

        self.add_node(from.clone(), None);
        self.add_node(to.clone(), None);

        tracing::debug!(from = %from, to = %to, cost = %cost, "add_edge");
        self.edges
            .entry(from.clone())
            .or_default()
            .insert(to.clone(), cost);
        self.edges.entry(to).or_default().insert(from, cost);
    }

    /// Remove the edge between `from` and `to` if present. Endpoints stay.
    pub fn delete_edge(&mut self, from: &str, to: &str) {
        let removed = self.remove_half_edge(from, to);
        self.remove_half_edge(to, from);
        if removed {
            tracing::debug!(from = %from, to = %to, "delete_edge");
        }
    }

    fn remove_half_edge(&mut self, from: &str, to: &str) -> bool {
        self.edges
            .get_mut(from)
            .is_some_and(|adjacent| adjacent.remove(to).is_some())
    }

    /// Remove a node and every edge incident to it. Absent nodes are ignored.
    pub fn delete_node(&mut self, id: &str) {
        if let Some(adjacent) = self.edges.remove(id) {
            for neighbor in adjacent.keys() {
                if let Some(back) = self.edges.get_mut(neighbor.as_str()) {
                    back.remove(id);
                }
            }
        }
        if self.nodes.remove(id).is_some() {
            tracing::debug!(node = %id, "delete_node");
        }
    }

    pub fn get_node(&self, id: &str) -> Result<&NodeAttrs> {
        self.nodes
            .get(id)
            .ok_or_else(|| GraphError::node_not_found(id))
    }

    /// Cost of the half-edge `from -> to`
    pub fn get_edge(&self, from: &str, to: &str) -> Result<Cost> {
        self.edges
            .get(from)
            .and_then(|adjacent| adjacent.get(to))
            .copied()
            .ok_or_else(|| GraphError::edge_not_found(from, to))
    }

    /// Nodes directly connected to `id`; empty for an unknown node
    pub fn get_neighbors(&self, id: &str) -> BTreeSet<&NodeId> {
        self.edges
            .get(id)
            .map(|adjacent| adjacent.keys().collect())
            .unwrap_or_default()
    }

    /// Neighbors of `id` in id order, with the cost of reaching each
    pub(crate) fn adjacent(&self, id: &str) -> impl Iterator<Item = (&NodeId, Cost)> {
        self.edges
            .get(id)
            .into_iter()
            .flat_map(|adjacent| adjacent.iter().map(|(n, c)| (n, *c)))
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges, each counted once
    pub fn edge_count(&self) -> usize {
        self.edges
            .iter()
            .map(|(from, adjacent)| adjacent.keys().filter(|to| from <= *to).count())
            .sum()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &NodeAttrs)> {
        self.nodes.iter()
    }

    /// Every undirected edge once as `(a, b, cost)` with `a <= b`, sorted
    pub fn edges(&self) -> Vec<(&NodeId, &NodeId, Cost)> {
        self.edges
            .iter()
            .flat_map(|(from, adjacent)| {
                adjacent
                    .iter()
                    .filter(move |(to, _)| from <= *to)
                    .map(move |(to, cost)| (from, to, *cost))
            })
            .collect()
    }

    /// Cost of walking `path` node by node.
    ///
    /// Edge costs are summed per hop and heuristic costs per node visited.
    /// Fails with `BrokenPath` at the first consecutive pair that is not
    /// connected.
    pub fn path_costs<S: AsRef<str>>(&self, path: &[S]) -> Result<PathCost> {
        let mut cost = PathCost::default();

        for id in path {
            cost.node_cost = cost.node_cost + self.get_node(id.as_ref())?.heuristic_cost;
        }

        for pair in path.windows(2) {
            let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
            let hop = self
                .get_edge(from, to)
                .map_err(|_| GraphError::broken_path(from, to))?;
            cost.edge_cost = cost.edge_cost + hop;
        }

        Ok(cost)
    }
}
