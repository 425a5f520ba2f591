//! Topological labeling via depth-first postorder.
//!
//! No cycle detection is performed. On a cyclic graph the labels are
//! unspecified, but the search still terminates.

use std::collections::HashSet;

use log::debug;

use crate::graph::{Graph, Visit};
use crate::types::{GraphResult, VertexId, VertexValue};

/// Stack entry of the iterative postorder walk.
#[derive(Debug, Clone, Copy)]
enum Step {
    Discover(VertexId),
    Finish(VertexId),
}

/// Append to `finished` every vertex reachable from `root` that is not yet
/// in `seen`, in the order a recursive DFS would finish them.
fn postorder<V: VertexValue>(
    graph: &Graph<V>,
    root: VertexId,
    seen: &mut HashSet<VertexId>,
    finished: &mut Vec<VertexId>,
) {
    let mut stack = vec![Step::Discover(root)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Discover(vertex) => {
                if !seen.insert(vertex) {
                    continue;
                }
                stack.push(Step::Finish(vertex));
                // Reversed so the first neighbor is explored first.
                let pending: Vec<VertexId> = graph
                    .store()
                    .neighbors_of(vertex)
                    .filter(|n| !seen.contains(n))
                    .collect();
                stack.extend(pending.into_iter().rev().map(Step::Discover));
            }
            Step::Finish(vertex) => finished.push(vertex),
        }
    }
}

impl<V: VertexValue> Graph<V> {
    /// Topological labels of the vertices reachable from `start`.
    ///
    /// Vertices are labeled `|V|`, `|V| - 1`, ... in the order they finish,
    /// and returned in reverse postorder, so labels ascend along the result
    /// and `label(u) < label(v)` for every arc `u -> v` of a DAG. Vertices
    /// not reachable from `start` receive no label.
    pub fn topo_sort(&self, start: &V) -> GraphResult<Vec<(&V, usize)>> {
        self.topo_sort_with(start, |_, _| ())
    }

    /// Like [`Graph::topo_sort`], calling `callback(value, label)` for each
    /// emitted pair. A stop signal truncates the result after that pair.
    pub fn topo_sort_with<C, R>(&self, start: &V, callback: C) -> GraphResult<Vec<(&V, usize)>>
    where
        C: FnMut(&V, usize) -> R,
        R: Into<Visit>,
    {
        let root = self.resolve(start)?;
        let mut seen = HashSet::new();
        let mut finished = Vec::new();
        postorder(self, root, &mut seen, &mut finished);
        debug!("topo_sort from {} labeled {} vertices", root, finished.len());
        Ok(self.emit_labels(finished, callback))
    }

    /// Topological labels of every vertex.
    ///
    /// Postorder walks are started from each still-unlabeled vertex in
    /// insertion order, so the labels cover exactly `1..=|V|`.
    pub fn topo_sort_all(&self) -> Vec<(&V, usize)> {
        let mut seen = HashSet::new();
        let mut finished = Vec::with_capacity(self.vertex_count());
        for root in self.vertex_set().ids() {
            if !seen.contains(&root) {
                postorder(self, root, &mut seen, &mut finished);
            }
        }
        self.emit_labels(finished, |_, _| ())
    }

    fn emit_labels<C, R>(&self, finished: Vec<VertexId>, mut callback: C) -> Vec<(&V, usize)>
    where
        C: FnMut(&V, usize) -> R,
        R: Into<Visit>,
    {
        let total = self.vertex_count();
        let mut labeled = Vec::with_capacity(finished.len());

        for (rank, vertex) in finished.into_iter().enumerate().rev() {
            // Finished ids were reached through stored arcs, so they resolve.
            let value = self.vertex_set().value(vertex);
            debug_assert!(value.is_some(), "labeled unknown vertex {}", vertex);
            let Some(value) = value else {
                continue;
            };
            let label = total - rank;
            labeled.push((value, label));
            let control: Visit = callback(value, label).into();
            if control == Visit::Stop {
                break;
            }
        }

        labeled
    }
}
