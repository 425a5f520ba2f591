//! Edge options and the deduplicated edge read model.

use serde::{Deserialize, Serialize};

use super::{DEFAULT_DIRECTED, DEFAULT_WEIGHT};

/// How an edge is installed: one arc (`directed`) or two, and its weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeOptions {
    /// Install a single arc instead of an arc pair.
    pub directed: bool,
    /// Weight stored on every installed arc.
    pub weight: f64,
}

impl EdgeOptions {
    /// Undirected edges of weight 1.
    pub fn new() -> Self {
        Self {
            directed: DEFAULT_DIRECTED,
            weight: DEFAULT_WEIGHT,
        }
    }

    /// Set the directed flag.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Set the weight.
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Unordered pair of vertex values.
///
/// `VertexPair::new(a, b) == VertexPair::new(b, a)`. A self-loop holds the
/// same value twice.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VertexPair<T>(pub T, pub T);

impl<T: PartialEq> VertexPair<T> {
    /// Pair two values.
    pub fn new(a: T, b: T) -> Self {
        Self(a, b)
    }

    /// Whether `value` is one of the two endpoints.
    pub fn contains(&self, value: &T) -> bool {
        self.0 == *value || self.1 == *value
    }

    /// The endpoint opposite `value`, if `value` is part of the pair.
    pub fn other(&self, value: &T) -> Option<&T> {
        if self.0 == *value {
            Some(&self.1)
        } else if self.1 == *value {
            Some(&self.0)
        } else {
            None
        }
    }
}

impl<T: PartialEq> PartialEq for VertexPair<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

impl<T: Eq> Eq for VertexPair<T> {}

/// A logical edge as reported by [`Graph::edges`](crate::graph::Graph::edges).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView<'a, V> {
    /// `true` iff the reverse arc does not exist.
    pub directed: bool,
    /// Weight of the first arc found for this pair.
    pub weight: f64,
    /// Both endpoints; for directed edges `.0` is the source.
    pub vertexes: VertexPair<&'a V>,
}
