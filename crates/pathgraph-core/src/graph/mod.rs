//! Graph model and path-finding operations
//!
//! - Undirected weighted graph with node/edge mutation
//! - Decrease-key priority frontier
//! - Best-first shortest-path search (Dijkstra, or A*-style with heuristics)

pub mod frontier;
pub mod model;
mod search;
pub mod types;

pub use frontier::{PriorityFrontier, SearchState};
pub use model::Graph;
pub use types::{Cost, NodeAttrs, NodeId, PathCost, ShortestPath};
