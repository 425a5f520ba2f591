//! CLI command implementations.

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{EdgeOptions, GraphError, GraphResult};

/// Split an edge argument of the form `FROM-TO` or `FROM:TO`.
pub fn parse_edge(spec: &str) -> GraphResult<(String, String)> {
    let (from, to) = spec
        .split_once(':')
        .or_else(|| spec.split_once('-'))
        .ok_or_else(|| GraphError::InvalidEdgeSpec(spec.to_string()))?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(GraphError::InvalidEdgeSpec(spec.to_string()));
    }
    Ok((from.to_string(), to.to_string()))
}

/// Build a graph from a vertex list and edge arguments.
///
/// Every edge endpoint must appear in `vertices`.
pub fn build_graph(
    vertices: &[String],
    edges: &[String],
    defaults: EdgeOptions,
) -> GraphResult<Graph<String>> {
    let mut graph = Graph::configure(defaults).build(vertices.iter().cloned());
    for spec in edges {
        let (from, to) = parse_edge(spec)?;
        graph.add_edge(&from, &to)?;
    }
    Ok(graph)
}

/// List all vertices.
pub fn cmd_vertexes(graph: &Graph<String>, json: bool) -> GraphResult<()> {
    let vertexes = graph.vertexes();
    if json {
        print_json(&vertexes)?;
    } else {
        println!("Vertices: {}", vertexes.len());
        for value in vertexes {
            println!("  {}", value);
        }
    }
    Ok(())
}

/// List all logical edges.
pub fn cmd_edges(graph: &Graph<String>, json: bool) -> GraphResult<()> {
    let edges = graph.edges();
    if json {
        print_json(&edges)?;
    } else {
        println!("Edges: {}", edges.len());
        for edge in &edges {
            let arrow = if edge.directed { "->" } else { "--" };
            println!(
                "  {} {} {} (weight {})",
                edge.vertexes.0, arrow, edge.vertexes.1, edge.weight
            );
        }
    }
    Ok(())
}

/// Breadth-first search.
pub fn cmd_bfs(graph: &Graph<String>, start: &str, json: bool) -> GraphResult<()> {
    let order = graph.bfs(&start.to_string())?;
    print_order("BFS", start, &order, json)
}

/// Breadth-first search with distances.
pub fn cmd_augmented_bfs(graph: &Graph<String>, start: &str, json: bool) -> GraphResult<()> {
    let layers = graph.augmented_bfs(&start.to_string())?;
    if json {
        let rows: Vec<_> = layers
            .iter()
            .map(|(value, distance)| serde_json::json!({"vertex": value, "distance": distance}))
            .collect();
        print_json(&rows)?;
    } else {
        println!("Augmented BFS from {}:", start);
        for (value, distance) in layers {
            println!("  [distance {}] {}", distance, value);
        }
    }
    Ok(())
}

/// Depth-first search.
pub fn cmd_dfs(graph: &Graph<String>, start: &str, json: bool) -> GraphResult<()> {
    let order = graph.dfs(&start.to_string())?;
    print_order("DFS", start, &order, json)
}

/// Component reachable from a vertex.
pub fn cmd_component(graph: &Graph<String>, start: &str, json: bool) -> GraphResult<()> {
    let members = graph.component(&start.to_string())?;
    print_order("Component", start, &members, json)
}

/// Topological labels, rooted at `start` or over the whole graph.
pub fn cmd_topo_sort(graph: &Graph<String>, start: Option<&str>, json: bool) -> GraphResult<()> {
    let labeled = match start {
        Some(start) => graph.topo_sort(&start.to_string())?,
        None => graph.topo_sort_all(),
    };
    if json {
        let rows: Vec<_> = labeled
            .iter()
            .map(|(value, label)| serde_json::json!({"vertex": value, "label": label}))
            .collect();
        print_json(&rows)?;
    } else {
        println!("Topological order:");
        for (value, label) in labeled {
            println!("  {:>4}  {}", label, value);
        }
    }
    Ok(())
}

/// All components.
pub fn cmd_ucc(graph: &Graph<String>, json: bool) -> GraphResult<()> {
    let components = graph.ucc();
    if json {
        print_json(&components)?;
    } else {
        println!("Components: {}", components.len());
        for (i, members) in components.iter().enumerate() {
            let names: Vec<&str> = members.iter().map(|v| v.as_str()).collect();
            println!("  {}: {}", i, names.join(", "));
        }
    }
    Ok(())
}

fn print_order(label: &str, start: &str, order: &[&String], json: bool) -> GraphResult<()> {
    if json {
        print_json(order)?;
    } else {
        let names: Vec<&str> = order.iter().map(|v| v.as_str()).collect();
        println!("{} from {}: {}", label, start, names.join(" "));
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> GraphResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
