//! Generic search engine and its BFS/DFS instantiations.
//!
//! Every search shares one skeleton: resolve the start vertex, mark and
//! admit it, then repeatedly pop a vertex from the frontier, admit its
//! unmarked neighbors (in arc insertion order) and visit it. The frontier
//! discipline decides the order: [`Fifo`] gives breadth-first search,
//! [`Lifo`] gives admission-order depth-first search.

use std::collections::{HashMap, HashSet, VecDeque};

use log::{debug, trace};

use crate::types::{GraphResult, VertexId, VertexValue};

use super::Graph;

/// Pending-work container driving a search.
pub trait Frontier<T> {
    /// Add an item.
    fn push(&mut self, item: T);

    /// Remove the next item according to the discipline.
    fn pop(&mut self) -> Option<T>;

    /// Whether no items are pending.
    fn is_empty(&self) -> bool;

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}

/// First-in first-out frontier (breadth-first).
#[derive(Debug, Clone)]
pub struct Fifo<T>(VecDeque<T>);

impl<T> Fifo<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Fifo<T> {
    fn push(&mut self, item: T) {
        self.0.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}

/// Last-in first-out frontier (depth-first).
#[derive(Debug, Clone)]
pub struct Lifo<T>(Vec<T>);

impl<T> Lifo<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self(Vec::new())
    }
}

impl<T> Default for Lifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Lifo<T> {
    fn push(&mut self, item: T) {
        self.0.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}

/// Result of a visit: keep searching or halt immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visit {
    /// Continue with the next frontier entry.
    #[default]
    Continue,
    /// Abandon the remaining frontier.
    Stop,
}

impl From<()> for Visit {
    fn from(_: ()) -> Self {
        Visit::Continue
    }
}

impl From<bool> for Visit {
    /// `true` means stop.
    fn from(stop: bool) -> Self {
        if stop {
            Visit::Stop
        } else {
            Visit::Continue
        }
    }
}

/// Per-step bookkeeping plugged into [`generic_search`].
pub trait SearchHooks {
    /// Called once when a vertex enters the frontier. `parent` is the vertex
    /// being expanded, `None` for the start vertex.
    fn admit(&mut self, _vertex: VertexId, _parent: Option<VertexId>) {}

    /// Called when a vertex is removed from the frontier, after its
    /// neighbors were admitted.
    fn visit(&mut self, vertex: VertexId) -> Visit;
}

/// Run the shared search skeleton from `start`.
///
/// Fails with `VertexNotFound` if `start` is not in the graph. The marked set
/// lives for this call only.
pub fn generic_search<V, F, H>(
    graph: &Graph<V>,
    start: &V,
    mut frontier: F,
    hooks: &mut H,
) -> GraphResult<()>
where
    V: VertexValue,
    F: Frontier<VertexId>,
    H: SearchHooks,
{
    let start_id = graph.resolve(start)?;
    debug!("{} from {}", frontier.name(), start_id);

    let mut marked: HashSet<VertexId> = HashSet::new();
    marked.insert(start_id);
    hooks.admit(start_id, None);
    frontier.push(start_id);

    while let Some(current) = frontier.pop() {
        for neighbor in graph.store().neighbors_of(current) {
            if marked.insert(neighbor) {
                hooks.admit(neighbor, Some(current));
                frontier.push(neighbor);
            }
        }
        trace!("{} visit {}", frontier.name(), current);
        if hooks.visit(current) == Visit::Stop {
            debug!("{} stopped at {}", frontier.name(), current);
            break;
        }
    }

    Ok(())
}

/// Collects visited values and forwards them to a callback.
struct Collect<'g, V, C> {
    graph: &'g Graph<V>,
    visited: Vec<&'g V>,
    callback: C,
}

impl<'g, V, C> SearchHooks for Collect<'g, V, C>
where
    V: VertexValue,
    C: FnMut(&V) -> Visit,
{
    fn visit(&mut self, vertex: VertexId) -> Visit {
        let value = self.graph.vertex_set().value(vertex);
        // Marked ids always resolve: they come from the vertex set or its arcs.
        debug_assert!(value.is_some(), "visited unknown vertex {}", vertex);
        match value {
            Some(value) => {
                self.visited.push(value);
                (self.callback)(value)
            }
            None => Visit::Continue,
        }
    }
}

/// Tracks the BFS layer of every admitted vertex.
struct Layered<'g, V, C> {
    graph: &'g Graph<V>,
    distance: HashMap<VertexId, u32>,
    visited: Vec<(&'g V, u32)>,
    callback: C,
}

impl<'g, V, C> SearchHooks for Layered<'g, V, C>
where
    V: VertexValue,
    C: FnMut(&V, u32) -> Visit,
{
    fn admit(&mut self, vertex: VertexId, parent: Option<VertexId>) {
        let layer = parent
            .and_then(|p| self.distance.get(&p))
            .map_or(0, |d| d + 1);
        self.distance.insert(vertex, layer);
    }

    fn visit(&mut self, vertex: VertexId) -> Visit {
        let layer = self.distance.get(&vertex).copied().unwrap_or(0);
        let value = self.graph.vertex_set().value(vertex);
        debug_assert!(value.is_some(), "visited unknown vertex {}", vertex);
        match value {
            Some(value) => {
                self.visited.push((value, layer));
                (self.callback)(value, layer)
            }
            None => Visit::Continue,
        }
    }
}

impl<V: VertexValue> Graph<V> {
    /// Breadth-first search from `start`; values in visitation order.
    pub fn bfs(&self, start: &V) -> GraphResult<Vec<&V>> {
        self.bfs_with(start, |_| ())
    }

    /// Breadth-first search calling `callback` per visited value.
    ///
    /// The callback may return `()` or a `bool`; `true` (or [`Visit::Stop`])
    /// halts the search. The returned values include the one that stopped it.
    pub fn bfs_with<C, R>(&self, start: &V, callback: C) -> GraphResult<Vec<&V>>
    where
        C: FnMut(&V) -> R,
        R: Into<Visit>,
    {
        self.collect_search(start, Fifo::new(), callback)
    }

    /// Breadth-first search reporting each value with its distance from `start`.
    pub fn augmented_bfs(&self, start: &V) -> GraphResult<Vec<(&V, u32)>> {
        self.augmented_bfs_with(start, |_, _| ())
    }

    /// Breadth-first search calling `callback(value, distance)` per visit.
    pub fn augmented_bfs_with<C, R>(
        &self,
        start: &V,
        mut callback: C,
    ) -> GraphResult<Vec<(&V, u32)>>
    where
        C: FnMut(&V, u32) -> R,
        R: Into<Visit>,
    {
        let mut hooks = Layered {
            graph: self,
            distance: HashMap::new(),
            visited: Vec::new(),
            callback: move |value: &V, layer: u32| -> Visit { callback(value, layer).into() },
        };
        generic_search(self, start, Fifo::new(), &mut hooks)?;
        Ok(hooks.visited)
    }

    /// Depth-first search from `start`; values in visitation order.
    ///
    /// This is admission-order DFS: neighbors are marked when pushed, so the
    /// order generally differs from recursive pre-order DFS.
    pub fn dfs(&self, start: &V) -> GraphResult<Vec<&V>> {
        self.dfs_with(start, |_| ())
    }

    /// Depth-first search calling `callback` per visited value.
    pub fn dfs_with<C, R>(&self, start: &V, callback: C) -> GraphResult<Vec<&V>>
    where
        C: FnMut(&V) -> R,
        R: Into<Visit>,
    {
        self.collect_search(start, Lifo::new(), callback)
    }

    fn collect_search<F, C, R>(
        &self,
        start: &V,
        frontier: F,
        mut callback: C,
    ) -> GraphResult<Vec<&V>>
    where
        F: Frontier<VertexId>,
        C: FnMut(&V) -> R,
        R: Into<Visit>,
    {
        let mut hooks = Collect {
            graph: self,
            visited: Vec::new(),
            callback: move |value: &V| -> Visit { callback(value).into() },
        };
        generic_search(self, start, frontier, &mut hooks)?;
        Ok(hooks.visited)
    }
}
