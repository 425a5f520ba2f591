//! All data types for the value-graph library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::{EdgeOptions, EdgeView, VertexPair};
pub use error::{GraphError, GraphResult};
pub use vertex::{Vertex, VertexId, VertexValue};

/// Edges are undirected unless configured otherwise.
pub const DEFAULT_DIRECTED: bool = false;

/// Weight given to edges when none is configured.
pub const DEFAULT_WEIGHT: f64 = 1.0;
