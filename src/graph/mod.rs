//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod edge_store;
pub mod traversal;
pub mod value_graph;
pub mod vertex_set;

pub use builder::GraphBuilder;
pub use edge_store::{ArcInfo, EdgeStore};
pub use traversal::{generic_search, Fifo, Frontier, Lifo, SearchHooks, Visit};
pub use value_graph::Graph;
pub use vertex_set::VertexSet;
