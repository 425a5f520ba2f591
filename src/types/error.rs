//! Error types for the value-graph library.

use thiserror::Error;

/// All errors that can occur in the value-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An edge endpoint is not a member of the vertex set.
    #[error("Vertex does not exist: {0}")]
    EdgeEndpointMissing(String),

    /// A traversal start value has no matching stored vertex.
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    /// Malformed edge argument on the command line.
    #[error("Invalid edge spec: {0} (expected FROM-TO or FROM:TO)")]
    InvalidEdgeSpec(String),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
