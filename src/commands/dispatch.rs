//! Command dispatch logic for pathgraph
use std::time::Instant;

use pathgraph_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::helpers::build_graph;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Path { from, to, graph }) => {
            let graph = build_graph(cli, graph)?;
            tracing::debug!(elapsed = ?start.elapsed(), "build_graph");
            commands::path::execute(cli, &graph, from, to)
        }

        Some(Commands::Cost { path, graph }) => {
            let graph = build_graph(cli, graph)?;
            tracing::debug!(elapsed = ?start.elapsed(), "build_graph");
            commands::cost::execute(cli, &graph, path)
        }

        Some(Commands::Neighbors { id, graph }) => {
            let graph = build_graph(cli, graph)?;
            commands::neighbors::execute(cli, &graph, id)
        }

        Some(Commands::Demo) => commands::demo::execute(cli),
    }
}

fn handle_no_command() -> Result<()> {
    pathgraph_core::bail_usage!("no command given (try `pathgraph --help`)")
}
