//! Phase 4 tests: CLI argument handling and command output.

use value_graph::cli::commands::{
    build_graph, cmd_augmented_bfs, cmd_bfs, cmd_component, cmd_dfs, cmd_edges, cmd_topo_sort,
    cmd_ucc, cmd_vertexes, parse_edge,
};
use value_graph::types::edge::EdgeOptions;
use value_graph::types::error::GraphError;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_parse_edge_separators() {
    assert_eq!(
        parse_edge("a-b").unwrap(),
        ("a".to_string(), "b".to_string())
    );
    assert_eq!(
        parse_edge(" x : y ").unwrap(),
        ("x".to_string(), "y".to_string())
    );
    // Colon wins, so dashes may appear inside values
    assert_eq!(
        parse_edge("node-1:node-2").unwrap(),
        ("node-1".to_string(), "node-2".to_string())
    );
}

#[test]
fn test_parse_edge_invalid() {
    assert!(matches!(
        parse_edge("ab"),
        Err(GraphError::InvalidEdgeSpec(_))
    ));
    assert!(matches!(
        parse_edge("-b"),
        Err(GraphError::InvalidEdgeSpec(_))
    ));
    assert!(matches!(
        parse_edge("a:"),
        Err(GraphError::InvalidEdgeSpec(_))
    ));
}

#[test]
fn test_build_graph() {
    let graph = build_graph(
        &strings(&["a", "b", "c"]),
        &strings(&["a-b", "b:c"]),
        EdgeOptions::default(),
    )
    .unwrap();
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.arc_count(), 4);
}

#[test]
fn test_build_graph_directed_defaults() {
    let graph = build_graph(
        &strings(&["a", "b"]),
        &strings(&["a-b"]),
        EdgeOptions::new().directed(true).weight(3.0),
    )
    .unwrap();
    let edges = graph.edges();
    assert!(edges[0].directed);
    assert!((edges[0].weight - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_build_graph_missing_endpoint() {
    let result = build_graph(&strings(&["a"]), &strings(&["a-z"]), EdgeOptions::default());
    assert!(matches!(result, Err(GraphError::EdgeEndpointMissing(_))));
}

#[test]
fn test_commands_run() {
    let graph = build_graph(
        &strings(&["1", "2", "3", "4"]),
        &strings(&["1-2", "2-3", "1-4"]),
        EdgeOptions::default(),
    )
    .unwrap();

    for json in [false, true] {
        assert!(cmd_vertexes(&graph, json).is_ok());
        assert!(cmd_edges(&graph, json).is_ok());
        assert!(cmd_bfs(&graph, "1", json).is_ok());
        assert!(cmd_augmented_bfs(&graph, "1", json).is_ok());
        assert!(cmd_dfs(&graph, "1", json).is_ok());
        assert!(cmd_component(&graph, "3", json).is_ok());
        assert!(cmd_topo_sort(&graph, Some("1"), json).is_ok());
        assert!(cmd_topo_sort(&graph, None, json).is_ok());
        assert!(cmd_ucc(&graph, json).is_ok());
    }
}

#[test]
fn test_commands_unknown_start() {
    let graph = build_graph(&strings(&["1"]), &[], EdgeOptions::default()).unwrap();
    assert!(matches!(
        cmd_bfs(&graph, "9", false),
        Err(GraphError::VertexNotFound(_))
    ));
    assert!(cmd_topo_sort(&graph, Some("9"), true).is_err());
}

#[test]
fn test_edges_serialize_to_json() {
    let graph = build_graph(
        &strings(&["a", "b"]),
        &strings(&["a-b"]),
        EdgeOptions::default(),
    )
    .unwrap();
    let json = serde_json::to_value(graph.edges()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"directed": false, "weight": 1.0, "vertexes": ["a", "b"]}])
    );
}

// ==================== Binary Tests ====================

fn run_vgraph(args: &[&str]) -> std::process::Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_vgraph"))
        .args(args)
        .output()
        .expect("failed to run vgraph")
}

fn stdout_str(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_binary_malformed_edge_exits_3() {
    let output = run_vgraph(&["--vertices", "1,2", "--edge", "1", "bfs", "1"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_missing_endpoint_exits_1() {
    let output = run_vgraph(&["--vertices", "1,2", "--edge", "1-9", "bfs", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains('9'));
}

#[test]
fn test_binary_bfs_json() {
    let output = run_vgraph(&[
        "--format", "json", "--vertices", "1,2", "--edge", "1-2", "bfs", "1",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let order: Vec<String> = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(order, strings(&["1", "2"]));
}

#[test]
fn test_binary_bfs_text() {
    let output = run_vgraph(&["--vertices", "1,2,3", "--edge", "1-2", "bfs", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout_str(&output).trim(), "BFS from 1: 1 2");
}

#[test]
fn test_binary_unknown_start_exits_1() {
    let output = run_vgraph(&["--vertices", "1,2", "bfs", "7"]);
    assert_eq!(output.status.code(), Some(1));
}
