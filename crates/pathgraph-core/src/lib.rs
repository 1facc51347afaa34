//! Pathgraph Core Library
//!
//! In-memory undirected weighted graph with a best-first shortest-path
//! search. Heuristic costs attached to nodes turn the search into an
//! A*-style walk; with all heuristics at zero it is plain Dijkstra.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;

pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use graph::{Cost, Graph, NodeAttrs, NodeId, PathCost, ShortestPath};
