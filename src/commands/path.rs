//! Path command
use pathgraph_core::error::Result;
use pathgraph_core::{Graph, ShortestPath};

use crate::cli::{Cli, OutputFormat};

/// Execute the path command
pub fn execute(cli: &Cli, graph: &Graph, from: &str, to: &str) -> Result<()> {
    let result = graph.shortest_path(from, to)?;
    output_path(cli, &result)
}

/// Print a found path in the selected format
pub fn output_path(cli: &Cli, result: &ShortestPath) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": result.nodes.first(),
                "to": result.nodes.last(),
                "path": result.nodes,
                "cost": result.cost,
                "hops": result.hops(),
                "expanded": result.expanded,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            let joined = result
                .nodes
                .iter()
                .map(|n| n.as_str())
                .collect::<Vec<_>>()
                .join(" -> ");
            println!("{}", joined);
            if !cli.quiet {
                println!("cost: {} ({} hops)", result.cost, result.hops());
            }
        }
    }
    Ok(())
}
