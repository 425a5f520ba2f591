//! Fluent API for building configured Graph instances.

use std::marker::PhantomData;

use crate::types::{EdgeOptions, VertexValue};

use super::Graph;

/// Builder carrying graph-wide default edge options.
///
/// ```
/// use value_graph::{EdgeOptions, Graph};
///
/// let graph: Graph<u32> = Graph::configure(EdgeOptions::new().directed(true)).build([1, 2]);
/// assert!(graph.defaults().directed);
/// ```
#[derive(Debug)]
pub struct GraphBuilder<V> {
    defaults: EdgeOptions,
    _vertex: PhantomData<fn() -> V>,
}

impl<V: VertexValue> GraphBuilder<V> {
    /// Create a builder with the given default edge options.
    pub fn new(defaults: EdgeOptions) -> Self {
        Self {
            defaults,
            _vertex: PhantomData,
        }
    }

    /// Make edges directed by default.
    pub fn directed(mut self, directed: bool) -> Self {
        self.defaults.directed = directed;
        self
    }

    /// Set the default edge weight.
    pub fn weight(mut self, weight: f64) -> Self {
        self.defaults.weight = weight;
        self
    }

    /// Default options the built graph will use.
    pub fn defaults(&self) -> EdgeOptions {
        self.defaults
    }

    /// Build a graph holding `values` as its initial vertices.
    pub fn build<I: IntoIterator<Item = V>>(self, values: I) -> Graph<V> {
        let mut graph = Graph::with_defaults(self.defaults);
        graph.extend(values);
        graph
    }
}

impl<V: VertexValue> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new(EdgeOptions::default())
    }
}
