use super::*;
use crate::graph::types::{Cost, NodeAttrs};

fn c(value: u32) -> Option<Cost> {
    Some(Cost::from(value))
}

fn ids(path: &ShortestPath) -> Vec<&str> {
    path.nodes.iter().map(|n| n.as_str()).collect()
}

/// s-a-b-c-d-e chain with a b-e shortcut
fn sample_graph() -> Graph {
    Graph::from_edges([
        ("s", "a", c(3)),
        ("a", "b", c(5)),
        ("b", "c", c(10)),
        ("c", "d", c(3)),
        ("d", "e", c(4)),
        ("b", "e", c(5)),
    ])
}

#[test]
fn test_shortest_path_sample() {
    let graph = sample_graph();
    let path = graph.shortest_path("s", "e").unwrap();

    assert_eq!(ids(&path), vec!["s", "a", "b", "e"]);
    assert_eq!(path.cost, Cost::from(13));
    assert_eq!(path.hops(), 3);
    assert_eq!(graph.path_costs(&path.nodes).unwrap().edge_cost, path.cost);
}

#[test]
fn test_shortest_path_is_undirected() {
    let graph = sample_graph();
    let path = graph.shortest_path("e", "s").unwrap();
    assert_eq!(ids(&path), vec!["e", "b", "a", "s"]);
    assert_eq!(path.cost, Cost::from(13));
}

#[test]
fn test_self_path() {
    let graph = sample_graph();
    let path = graph.shortest_path("c", "c").unwrap();
    assert_eq!(ids(&path), vec!["c"]);
    assert_eq!(path.cost, Cost::ZERO);
    assert_eq!(path.expanded, 1);
}

#[test]
fn test_self_path_isolated_node() {
    let mut graph = Graph::new();
    graph.add_node("lonely", None);
    assert_eq!(ids(&graph.shortest_path("lonely", "lonely").unwrap()), vec!["lonely"]);
}

#[test]
fn test_unreachable_between_components() {
    let graph = Graph::from_edges([("a", "b", c(1)), ("x", "y", c(1))]);
    let err = graph.shortest_path("a", "y").unwrap_err();
    assert!(matches!(
        err,
        GraphError::Unreachable { ref from, ref to } if from == "a" && to == "y"
    ));
}

#[test]
fn test_missing_endpoint() {
    let graph = sample_graph();
    assert!(matches!(
        graph.shortest_path("s", "nowhere"),
        Err(GraphError::NodeNotFound { ref id }) if id == "nowhere"
    ));
    assert!(matches!(
        graph.shortest_path("nowhere", "s"),
        Err(GraphError::NodeNotFound { .. })
    ));
}

#[test]
fn test_prefers_cheaper_longer_route() {
    let graph = Graph::from_edges([
        ("s", "t", c(10)),
        ("s", "a", c(1)),
        ("a", "b", c(1)),
        ("b", "t", c(1)),
    ]);
    let path = graph.shortest_path("s", "t").unwrap();
    assert_eq!(ids(&path), vec!["s", "a", "b", "t"]);
    assert_eq!(path.cost, Cost::from(3));
}

#[test]
fn test_decrease_key_updates_predecessor() {
    // t is first discovered through the direct edge, then cheaper via m
    let graph = Graph::from_edges([("s", "t", c(9)), ("s", "m", c(2)), ("m", "t", c(3))]);
    let path = graph.shortest_path("s", "t").unwrap();
    assert_eq!(ids(&path), vec!["s", "m", "t"]);
    assert_eq!(path.cost, Cost::from(5));
}

#[test]
fn test_self_loop_ignored() {
    let mut graph = Graph::from_edges([("s", "a", c(2)), ("a", "t", c(2))]);
    graph.add_edge("a", "a", c(0));
    let path = graph.shortest_path("s", "t").unwrap();
    assert_eq!(ids(&path), vec!["s", "a", "t"]);
}

#[test]
fn test_deleted_edge_reroutes() {
    let mut graph = sample_graph();
    graph.delete_edge("b", "e");
    let path = graph.shortest_path("s", "e").unwrap();
    assert_eq!(ids(&path), vec!["s", "a", "b", "c", "d", "e"]);
    assert_eq!(path.cost, Cost::from(25));
}

#[test]
fn test_deleted_node_disconnects() {
    let mut graph = sample_graph();
    graph.delete_node("b");
    assert!(matches!(
        graph.shortest_path("s", "e"),
        Err(GraphError::Unreachable { .. })
    ));
}

#[test]
fn test_heuristic_steers_expansion() {
    // Two equal-cost routes; the heuristic on l makes the search skip it
    let mut graph = Graph::from_edges([
        ("s", "l", c(1)),
        ("l", "t", c(1)),
        ("s", "r", c(1)),
        ("r", "t", c(1)),
    ]);
    let plain = graph.shortest_path("s", "t").unwrap();
    assert_eq!(plain.cost, Cost::from(2));

    graph.add_node("l", Some(NodeAttrs::new(Cost::from(5))));
    let guided = graph.shortest_path("s", "t").unwrap();
    assert_eq!(ids(&guided), vec!["s", "r", "t"]);
    assert_eq!(guided.cost, Cost::from(2));
}

#[test]
fn test_admissible_heuristic_keeps_optimum() {
    let mut graph = sample_graph();
    // remaining edge distance to e, never overestimated
    for (id, h) in [("s", 13), ("a", 10), ("b", 5), ("c", 7), ("d", 4), ("e", 0)] {
        graph.add_node(id, Some(NodeAttrs::new(Cost::from(h))));
    }
    let path = graph.shortest_path("s", "e").unwrap();
    assert_eq!(ids(&path), vec!["s", "a", "b", "e"]);
    assert_eq!(path.cost, Cost::from(13));
}

#[test]
fn test_inadmissible_heuristic_may_be_suboptimal() {
    // The cheap route through m is penalised by an overestimating heuristic
    let mut graph = Graph::from_edges([("s", "m", c(1)), ("m", "t", c(1)), ("s", "t", c(5))]);
    graph.add_node("m", Some(NodeAttrs::new(Cost::from(100))));

    let path = graph.shortest_path("s", "t").unwrap();
    assert_eq!(ids(&path), vec!["s", "t"]);
    assert_eq!(path.cost, Cost::from(5));
}

#[test]
fn test_fractional_costs() {
    let graph = Graph::from_edges([
        ("s", "a", Some(Cost::new(0.5).unwrap())),
        ("a", "t", Some(Cost::new(0.25).unwrap())),
        ("s", "t", Some(Cost::new(1.0).unwrap())),
    ]);
    let path = graph.shortest_path("s", "t").unwrap();
    assert_eq!(ids(&path), vec!["s", "a", "t"]);
    assert_eq!(path.cost, Cost::new(0.75).unwrap());
}

#[test]
fn test_search_leaves_graph_untouched() {
    let graph = sample_graph();
    let before = graph.clone();
    graph.shortest_path("s", "e").unwrap();
    assert_eq!(graph, before);
}

#[test]
fn test_equal_cost_routes_resolve_the_same_way() {
    let build = || {
        Graph::from_edges([
            ("s", "l", c(1)),
            ("s", "r", c(1)),
            ("s", "m", c(1)),
            ("l", "t", c(1)),
            ("r", "t", c(1)),
            ("m", "t", c(1)),
        ])
    };

    let paths: std::collections::BTreeSet<Vec<NodeId>> = (0..200)
        .map(|_| build().shortest_path("s", "t").unwrap().nodes)
        .collect();
    assert_eq!(paths.len(), 1, "{:?}", paths);
    // neighbors are expanded in id order, so l is reached first
    assert_eq!(
        paths.into_iter().next().unwrap(),
        vec![NodeId::from("s"), NodeId::from("l"), NodeId::from("t")]
    );
}

#[test]
fn test_huge_costs_stay_finite() {
    let max = Some(Cost::new(f64::MAX).unwrap());
    let graph = Graph::from_edges([("a", "b", max), ("b", "c", max)]);

    let path = graph.shortest_path("a", "c").unwrap();
    assert_eq!(ids(&path), vec!["a", "b", "c"]);
    assert!(path.cost.value().is_finite());
}
