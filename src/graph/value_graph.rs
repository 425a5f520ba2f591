//! Core graph structure — value-keyed vertex set + edge store.

use std::collections::HashSet;

use log::debug;

use crate::types::{
    EdgeOptions, EdgeView, GraphError, GraphResult, VertexId, VertexPair, VertexValue,
};

use super::{EdgeStore, GraphBuilder, VertexSet};

/// In-memory graph whose vertices are identified by value.
///
/// Undirected edges are stored as two arcs, directed edges as one. All
/// mutation methods return `&mut Self` so calls can be chained.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// All vertices, unique by value.
    vertices: VertexSet<V>,
    /// Outgoing arcs per vertex.
    store: EdgeStore,
    /// Options used by [`Graph::add_edge`].
    defaults: EdgeOptions,
}

impl<V: VertexValue> Graph<V> {
    /// Create an empty graph with undirected, weight-1 default edges.
    pub fn new() -> Self {
        Self::with_defaults(EdgeOptions::default())
    }

    /// Create an empty graph with the given default edge options.
    pub fn with_defaults(defaults: EdgeOptions) -> Self {
        Self {
            vertices: VertexSet::new(),
            store: EdgeStore::new(),
            defaults,
        }
    }

    /// Create a graph holding the given vertices and no edges.
    pub fn from_vertices<I: IntoIterator<Item = V>>(values: I) -> Self {
        let mut graph = Self::new();
        graph.extend(values);
        graph
    }

    /// Start building a graph whose edges default to `options`.
    pub fn configure(options: EdgeOptions) -> GraphBuilder<V> {
        GraphBuilder::new(options)
    }

    /// Default edge options of this graph.
    pub fn defaults(&self) -> EdgeOptions {
        self.defaults
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of logical edges, as reported by [`Graph::edges`].
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Number of stored arcs.
    pub fn arc_count(&self) -> usize {
        self.store.arc_count()
    }

    /// Whether a vertex equal to `value` exists.
    pub fn contains_vertex(&self, value: &V) -> bool {
        self.vertices.contains(value)
    }

    /// Vertex values in insertion order.
    pub fn vertexes(&self) -> Vec<&V> {
        self.vertices.iter().map(|v| &v.value).collect()
    }

    /// Values one outgoing arc away from `value`, in arc insertion order.
    pub fn neighbors(&self, value: &V) -> GraphResult<Vec<&V>> {
        let id = self.resolve(value)?;
        Ok(self
            .store
            .neighbors_of(id)
            .filter_map(|n| self.vertices.value(n))
            .collect())
    }

    /// Every logical edge exactly once, deduplicated by unordered pair.
    pub fn edges(&self) -> Vec<EdgeView<'_, V>> {
        let mut seen: HashSet<(VertexId, VertexId)> = HashSet::new();
        let mut views = Vec::new();

        for id in self.vertices.ids() {
            for info in self.store.edge_info_of(id) {
                let VertexPair(from, to) = info.pair;
                if !seen.insert((from.min(to), from.max(to))) {
                    continue;
                }
                // drop_all keeps arcs in sync with the vertex set.
                let (a, b) = (self.vertices.value(from), self.vertices.value(to));
                debug_assert!(a.is_some() && b.is_some(), "dangling arc {} -> {}", from, to);
                let (Some(a), Some(b)) = (a, b) else {
                    continue;
                };
                views.push(EdgeView {
                    directed: info.directed,
                    weight: info.weight,
                    vertexes: VertexPair::new(a, b),
                });
            }
        }

        views
    }

    /// Add a vertex. Adding a value equal to an existing vertex is a no-op.
    pub fn add_vertex(&mut self, value: V) -> &mut Self {
        let id = self.vertices.insert(value);
        debug!("add_vertex {}", id);
        self
    }

    /// Remove the vertex equal to `value` together with all incident arcs.
    ///
    /// No-op if the vertex is absent.
    pub fn remove_vertex(&mut self, value: &V) -> &mut Self {
        if let Some(id) = self.vertices.id_of(value) {
            self.store.drop_all(id);
            self.vertices.remove(value);
            debug!("remove_vertex {} ({:?})", id, value);
        }
        self
    }

    /// Add an edge using the graph's default options.
    pub fn add_edge(&mut self, v1: &V, v2: &V) -> GraphResult<&mut Self> {
        self.add_edge_with(v1, v2, self.defaults)
    }

    /// Add an edge with explicit options.
    ///
    /// `options` replaces the graph defaults as a whole; to override a single
    /// field start from them, e.g. `graph.defaults().directed(true)`. Both
    /// endpoints must already exist; otherwise nothing is installed.
    pub fn add_edge_with(
        &mut self,
        v1: &V,
        v2: &V,
        options: EdgeOptions,
    ) -> GraphResult<&mut Self> {
        let from = self
            .vertices
            .id_of(v1)
            .ok_or_else(|| GraphError::EdgeEndpointMissing(format!("{:?}", v1)))?;
        let to = self
            .vertices
            .id_of(v2)
            .ok_or_else(|| GraphError::EdgeEndpointMissing(format!("{:?}", v2)))?;

        self.store.connect(from, to, options.weight);
        if !options.directed {
            self.store.connect(to, from, options.weight);
        }
        debug!(
            "add_edge {} -> {} (directed: {}, weight: {})",
            from, to, options.directed, options.weight
        );
        Ok(self)
    }

    /// Remove the arc `v1 -> v2` and its reverse arc, if any.
    ///
    /// No-op if `v1 -> v2` does not exist.
    pub fn remove_edge(&mut self, v1: &V, v2: &V) -> &mut Self {
        if let (Some(from), Some(to)) = (self.vertices.id_of(v1), self.vertices.id_of(v2)) {
            if self.store.disconnect(from, to) {
                debug!("remove_edge {} -> {}", from, to);
            }
        }
        self
    }

    /// Resolve a value to its stored vertex id.
    pub(crate) fn resolve(&self, value: &V) -> GraphResult<VertexId> {
        self.vertices
            .id_of(value)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", value)))
    }

    pub(crate) fn vertex_set(&self) -> &VertexSet<V> {
        &self.vertices
    }

    pub(crate) fn store(&self) -> &EdgeStore {
        &self.store
    }
}

impl<V: VertexValue> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexValue> Extend<V> for Graph<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.add_vertex(value);
        }
    }
}

impl<V: VertexValue> FromIterator<V> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_vertices(iter)
    }
}
