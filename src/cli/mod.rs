//! CLI argument parsing for pathgraph
//!
//! Supports global flags: --format, --config, --quiet, --verbose, --log-level, --log-json

pub mod output;
pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;
use parse::{parse_edge, parse_node, EdgeSpec, NodeSpec};

/// Pathgraph - weighted undirected graphs and shortest paths
#[derive(Parser, Debug)]
#[command(name = "pathgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// TOML file with graph defaults (default_edge_cost, default_heuristic_cost)
    #[arg(long, global = true, env = "PATHGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Graph given inline on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Edge as FROM:TO[:COST] (repeatable)
    #[arg(long = "edge", short = 'e', value_parser = parse_edge, action = clap::ArgAction::Append)]
    pub edges: Vec<EdgeSpec>,

    /// Node as ID[:HEURISTIC[:LABEL]] (repeatable)
    #[arg(long = "node", short = 'n', value_parser = parse_node, action = clap::ArgAction::Append)]
    pub nodes: Vec<NodeSpec>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the cheapest path between two nodes
    Path {
        /// Source node
        from: String,

        /// Target node
        to: String,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Cost of walking an explicit node sequence
    Cost {
        /// Nodes in walking order
        #[arg(required = true)]
        path: Vec<String>,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// List the nodes adjacent to a node
    Neighbors {
        /// Node to inspect
        id: String,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Run the shortest path on a built-in sample graph
    Demo,
}
