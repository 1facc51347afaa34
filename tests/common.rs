use assert_cmd::{cargo::cargo_bin_cmd, Command};

pub fn pathgraph() -> Command {
    cargo_bin_cmd!("pathgraph")
}

/// Edge arguments for the six-node sample graph
#[allow(dead_code)]
pub fn sample_edge_args() -> Vec<&'static str> {
    vec![
        "--edge", "s:a:3", "--edge", "a:b:5", "--edge", "b:c:10", "--edge", "c:d:3", "--edge",
        "d:e:4", "--edge", "b:e:5",
    ]
}
