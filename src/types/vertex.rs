//! Vertex identity: stable handles around user-supplied values.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

/// Capability required of vertex values.
///
/// Vertices are looked up by value, so two values that compare equal under
/// `Eq` (and hash identically) name the same vertex. `Debug` is used when a
/// value has to be reported in an error.
pub trait VertexValue: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> VertexValue for T {}

/// Stable handle of a stored vertex, unique for the lifetime of a graph.
///
/// Ids are never reused, even after the vertex is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VertexId(pub u64);

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A stored vertex: the identity box around a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<V> {
    /// Handle assigned by the owning set.
    pub id: VertexId,
    /// The wrapped user value.
    pub value: V,
}

impl<V> Vertex<V> {
    /// Wrap a value. Uniqueness is enforced by the owning set, not here.
    pub fn new(id: VertexId, value: V) -> Self {
        Self { id, value }
    }
}
