//! Shared helpers for commands

use pathgraph_core::error::Result;
use pathgraph_core::{Graph, GraphConfig};

use crate::cli::{Cli, GraphArgs};

/// Load the configured defaults, falling back to the built-in ones
pub fn load_config(cli: &Cli) -> Result<GraphConfig> {
    match &cli.config {
        Some(path) => GraphConfig::load(path),
        None => Ok(GraphConfig::default()),
    }
}

/// Build a graph from `--node` and `--edge` arguments.
///
/// Nodes are added first so that explicit attributes are in place before
/// edges create any remaining endpoints with defaults.
pub fn build_graph(cli: &Cli, args: &GraphArgs) -> Result<Graph> {
    let config = load_config(cli)?;
    let mut graph = Graph::with_config(&config)?;

    for node in &args.nodes {
        graph.add_node(node.id.as_str(), node.attrs.clone());
    }
    for edge in &args.edges {
        graph.add_edge(edge.from.as_str(), edge.to.as_str(), edge.cost);
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "build_graph"
    );
    Ok(graph)
}
