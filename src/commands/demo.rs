//! Demo command
use pathgraph_core::error::Result;
use pathgraph_core::{Cost, Graph};

use crate::cli::Cli;

/// The six-node sample graph: an s..e chain with a b-e shortcut
pub fn sample_graph() -> Graph {
    let edges = [
        ("s", "a", 3),
        ("a", "b", 5),
        ("b", "c", 10),
        ("c", "d", 3),
        ("d", "e", 4),
        ("b", "e", 5),
    ];
    Graph::from_edges(
        edges
            .into_iter()
            .map(|(from, to, cost)| (from, to, Some(Cost::from(cost)))),
    )
}

/// Execute the demo command
pub fn execute(cli: &Cli) -> Result<()> {
    let graph = sample_graph();
    if !cli.quiet && cli.format == crate::cli::OutputFormat::Human {
        for (a, b, cost) in graph.edges() {
            println!("{} -- {} ({})", a, b, cost);
        }
        println!();
    }

    let result = graph.shortest_path("s", "e")?;
    super::path::output_path(cli, &result)
}
