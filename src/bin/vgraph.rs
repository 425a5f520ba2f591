//! CLI entry point for the `vgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use value_graph::cli::commands;
use value_graph::{EdgeOptions, GraphError};

#[derive(Parser)]
#[command(
    name = "vgraph",
    about = "vgraph — build a small value graph and run a search over it"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Comma-separated vertex values
    #[arg(long, value_delimiter = ',')]
    vertices: Vec<String>,

    /// Edge between two vertices, FROM-TO or FROM:TO (repeatable)
    #[arg(long = "edge")]
    edges: Vec<String>,

    /// Make edges directed
    #[arg(long)]
    directed: bool,

    /// Weight given to every edge
    #[arg(long, default_value = "1.0")]
    weight: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List vertices in insertion order
    Vertexes,
    /// List logical edges
    Edges,
    /// Breadth-first search
    Bfs {
        /// Start vertex
        start: String,
    },
    /// Breadth-first search with distances
    AugmentedBfs {
        /// Start vertex
        start: String,
    },
    /// Admission-order depth-first search
    Dfs {
        /// Start vertex
        start: String,
    },
    /// Vertices reachable from a start vertex
    Component {
        /// Start vertex
        start: String,
    },
    /// Topological labels (whole graph when no start is given)
    TopoSort {
        /// Optional start vertex
        start: Option<String>,
    },
    /// All components
    Ucc,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let defaults = EdgeOptions::new().directed(cli.directed).weight(cli.weight);
    let graph = match commands::build_graph(&cli.vertices, &cli.edges, defaults) {
        Ok(graph) => graph,
        Err(e @ GraphError::InvalidEdgeSpec(_)) => {
            eprintln!("{}", e);
            process::exit(3);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let result = match &cli.command {
        Commands::Vertexes => commands::cmd_vertexes(&graph, json),
        Commands::Edges => commands::cmd_edges(&graph, json),
        Commands::Bfs { start } => commands::cmd_bfs(&graph, start, json),
        Commands::AugmentedBfs { start } => commands::cmd_augmented_bfs(&graph, start, json),
        Commands::Dfs { start } => commands::cmd_dfs(&graph, start, json),
        Commands::Component { start } => commands::cmd_component(&graph, start, json),
        Commands::TopoSort { start } => commands::cmd_topo_sort(&graph, start.as_deref(), json),
        Commands::Ucc => commands::cmd_ucc(&graph, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
