//! Adjacency storage: outgoing arcs per vertex, in insertion order.

use std::collections::HashMap;

use crate::types::{VertexId, VertexPair};

/// One directed arc stored under its source vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    /// Target vertex.
    pub to: VertexId,
    /// Weight of the arc.
    pub weight: f64,
}

/// Per-arc descriptor produced by [`EdgeStore::edge_info_of`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcInfo {
    /// `true` iff the reverse arc is absent.
    pub directed: bool,
    /// Weight of this arc.
    pub weight: f64,
    /// Source and target of this arc.
    pub pair: VertexPair<VertexId>,
}

/// Maps every vertex to its outgoing arcs.
#[derive(Debug, Clone, Default)]
pub struct EdgeStore {
    /// Adjacency: source -> outgoing arcs in insertion order.
    outgoing: HashMap<VertexId, Vec<Arc>>,
}

impl EdgeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            outgoing: HashMap::new(),
        }
    }

    /// Install the arc `from -> to`, overwriting the weight if it exists.
    pub fn connect(&mut self, from: VertexId, to: VertexId, weight: f64) {
        let arcs = self.outgoing.entry(from).or_default();
        match arcs.iter_mut().find(|a| a.to == to) {
            Some(arc) => arc.weight = weight,
            None => arcs.push(Arc { to, weight }),
        }
    }

    /// Outgoing arcs of `vertex`.
    pub fn arcs_from(&self, vertex: VertexId) -> &[Arc] {
        self.outgoing.get(&vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the arc `from -> to` exists.
    pub fn has_arc(&self, from: VertexId, to: VertexId) -> bool {
        self.arcs_from(from).iter().any(|a| a.to == to)
    }

    /// Targets of the outgoing arcs of `vertex`.
    pub fn neighbors_of(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.arcs_from(vertex).iter().map(|a| a.to)
    }

    /// One descriptor per outgoing arc of `vertex`.
    pub fn edge_info_of(&self, vertex: VertexId) -> Vec<ArcInfo> {
        self.arcs_from(vertex)
            .iter()
            .map(|arc| ArcInfo {
                directed: !self.has_arc(arc.to, vertex),
                weight: arc.weight,
                pair: VertexPair::new(vertex, arc.to),
            })
            .collect()
    }

    /// Remove `v1 -> v2` and, if that arc existed, `v2 -> v1` as well.
    ///
    /// Returns `false` (leaving the store untouched) when `v1 -> v2` is
    /// absent, even if `v2 -> v1` exists.
    pub fn disconnect(&mut self, v1: VertexId, v2: VertexId) -> bool {
        if !self.remove_arc(v1, v2) {
            return false;
        }
        self.remove_arc(v2, v1);
        true
    }

    /// Remove every arc leaving or entering `vertex`.
    pub fn drop_all(&mut self, vertex: VertexId) {
        self.outgoing.remove(&vertex);
        for arcs in self.outgoing.values_mut() {
            arcs.retain(|a| a.to != vertex);
        }
        self.outgoing.retain(|_, arcs| !arcs.is_empty());
    }

    /// Total number of stored arcs.
    pub fn arc_count(&self) -> usize {
        self.outgoing.values().map(Vec::len).sum()
    }

    fn remove_arc(&mut self, from: VertexId, to: VertexId) -> bool {
        let Some(arcs) = self.outgoing.get_mut(&from) else {
            return false;
        };
        let before = arcs.len();
        arcs.retain(|a| a.to != to);
        let removed = arcs.len() != before;
        if arcs.is_empty() {
            self.outgoing.remove(&from);
        }
        removed
    }
}
