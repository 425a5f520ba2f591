//! value-graph — in-memory graph keyed by vertex value.
//!
//! Stores an arbitrary vertex/edge set and runs breadth-first,
//! depth-first, distance-augmented, topological and component searches over
//! it, all through one generic search engine.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{generic_search, Fifo, Frontier, Graph, GraphBuilder, Lifo, SearchHooks, Visit};
pub use types::{
    EdgeOptions, EdgeView, GraphError, GraphResult, Vertex, VertexId, VertexPair, VertexValue,
    DEFAULT_DIRECTED, DEFAULT_WEIGHT,
};
