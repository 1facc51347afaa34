//! Best-first shortest-path search over a [`Graph`]
//!
//! Drives a [`PriorityFrontier`] from the source until the target is
//! popped or the frontier runs dry.

use std::collections::HashMap;
use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::frontier::{PriorityFrontier, SearchState};
use crate::graph::model::Graph;
use crate::graph::types::{NodeId, ShortestPath};

mod path;

use path::reconstruct_path;

impl Graph {
    /// Find the cheapest path from `from` to `to`.
    ///
    /// Best-first search ordered by `cost_to + heuristic_cost`. With every
    /// heuristic at zero this is Dijkstra's algorithm and the result is
    /// optimal. Heuristics are used as given: the search stops as soon as
    /// `to` is popped, so an inadmissible heuristic can yield a costlier
    /// path than the optimum.
    ///
    /// # Errors
    /// * `NodeNotFound` - either endpoint is not in the graph
    /// * `Unreachable` - the frontier ran dry before `to` was reached
    #[tracing::instrument(skip(self), fields(from = %from, to = %to, nodes = self.node_count()))]
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<ShortestPath> {
        let start = Instant::now();

        let source = self.get_node(from)?;
        self.get_node(to)?;

        let mut processed: HashMap<NodeId, SearchState> = HashMap::new();
        let mut frontier = PriorityFrontier::new();
        frontier.push(
            NodeId::from(from),
            SearchState::source(source.heuristic_cost),
        );

        // Main search loop
        while let Some((current, state)) = frontier.pop() {
            let cost_to = state.cost_to;

            if current.as_str() == to {
                processed.insert(current, state);
                let result = ShortestPath {
                    nodes: reconstruct_path(from, to, &processed),
                    cost: cost_to,
                    expanded: processed.len(),
                };
                tracing::debug!(
                    cost = %result.cost,
                    hops = result.hops(),
                    expanded = result.expanded,
                    "path_found"
                );
                crate::trace_time!(start, "shortest_path");
                return Ok(result);
            }

            processed.insert(current.clone(), state);

            for (neighbor, hop_cost) in self.adjacent(current.as_str()) {
                if processed.contains_key(neighbor) {
                    continue;
                }
                let heuristic_cost = self.get_node(neighbor.as_str())?.heuristic_cost;
                frontier.push(
                    neighbor.clone(),
                    SearchState {
                        cost_to: cost_to + hop_cost,
                        hop_cost,
                        heuristic_cost,
                        predecessor: Some(current.clone()),
                    },
                );
            }
        }

        tracing::debug!(expanded = processed.len(), "no_path");
        crate::trace_time!(start, "shortest_path");
        Err(GraphError::unreachable(from, to))
    }
}

#[cfg(test)]
mod tests;
