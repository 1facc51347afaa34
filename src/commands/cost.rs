//! Cost command
use pathgraph_core::error::Result;
use pathgraph_core::Graph;

use crate::cli::{Cli, OutputFormat};

/// Execute the cost command
pub fn execute(cli: &Cli, graph: &Graph, path: &[String]) -> Result<()> {
    let cost = graph.path_costs(path)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path,
                "edge_cost": cost.edge_cost,
                "node_cost": cost.node_cost,
                "total": cost.total(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", cost.total());
            if !cli.quiet {
                println!("edges: {}, nodes: {}", cost.edge_cost, cost.node_cost);
            }
        }
    }
    Ok(())
}
