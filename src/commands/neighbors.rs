//! Neighbors command
use pathgraph_core::error::Result;
use pathgraph_core::Graph;

use crate::cli::{Cli, OutputFormat};

/// Execute the neighbors command
pub fn execute(cli: &Cli, graph: &Graph, id: &str) -> Result<()> {
    graph.get_node(id)?;

    // (neighbor, cost) pairs in id order
    let entries: Vec<(&str, pathgraph_core::Cost)> = graph
        .get_neighbors(id)
        .into_iter()
        .map(|n| graph.get_edge(id, n.as_str()).map(|cost| (n.as_str(), cost)))
        .collect::<Result<_>>()?;

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = entries
                .iter()
                .map(|(n, cost)| serde_json::json!({ "id": n, "cost": cost }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if entries.is_empty() {
                if !cli.quiet {
                    println!("No neighbors for {}", id);
                }
            } else {
                for (n, cost) in entries {
                    println!("{} ({})", n, cost);
                }
            }
        }
    }
    Ok(())
}
