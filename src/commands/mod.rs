//! CLI commands for pathgraph

pub mod cost;
pub mod demo;
pub mod dispatch;
pub mod helpers;
pub mod neighbors;
pub mod path;
