//! Value-keyed vertex set preserving insertion order.

use std::collections::HashMap;

use crate::types::{Vertex, VertexId, VertexValue};

/// Set of vertices, unique by value equality.
///
/// Inserting a value equal to an existing one resolves to the stored vertex.
/// Lookups by id or by value are constant time, also after removals.
#[derive(Debug, Clone)]
pub struct VertexSet<V> {
    /// Stored vertices, indexed by id.
    vertices: HashMap<VertexId, Vertex<V>>,
    /// Ids in insertion order.
    order: Vec<VertexId>,
    /// Value -> id lookup.
    by_value: HashMap<V, VertexId>,
    /// Next id to hand out.
    next_id: u64,
}

impl<V: VertexValue> VertexSet<V> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            order: Vec::new(),
            by_value: HashMap::new(),
            next_id: 0,
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Insert a value, returning its id. No-op if an equal value is stored.
    pub fn insert(&mut self, value: V) -> VertexId {
        if let Some(&id) = self.by_value.get(&value) {
            return id;
        }
        let id = VertexId(self.next_id);
        self.next_id += 1;
        self.by_value.insert(value.clone(), id);
        self.vertices.insert(id, Vertex::new(id, value));
        self.order.push(id);
        id
    }

    /// Whether a value equal to `value` is stored.
    pub fn contains(&self, value: &V) -> bool {
        self.by_value.contains_key(value)
    }

    /// Id of the stored vertex equal to `value`.
    pub fn id_of(&self, value: &V) -> Option<VertexId> {
        self.by_value.get(value).copied()
    }

    /// The stored vertex equal to `value`.
    pub fn get(&self, value: &V) -> Option<&Vertex<V>> {
        let id = self.id_of(value)?;
        self.vertex(id)
    }

    /// Look up a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<V>> {
        self.vertices.get(&id)
    }

    /// Value of the vertex with the given id.
    pub fn value(&self, id: VertexId) -> Option<&V> {
        self.vertex(id).map(|v| &v.value)
    }

    /// Remove the vertex equal to `value`, returning its id.
    pub fn remove(&mut self, value: &V) -> Option<VertexId> {
        let id = self.by_value.remove(value)?;
        self.vertices.remove(&id);
        self.order.retain(|&o| o != id);
        Some(id)
    }

    /// Iterate over stored vertices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex<V>> {
        self.order.iter().filter_map(|id| self.vertices.get(id))
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.order.iter().copied()
    }
}

impl<V: VertexValue> Default for VertexSet<V> {
    fn default() -> Self {
        Self::new()
    }
}
