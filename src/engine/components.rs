//! Connectivity queries built on breadth-first search.

use std::collections::HashSet;

use log::debug;

use crate::graph::Graph;
use crate::types::{GraphResult, VertexValue};

impl<V: VertexValue> Graph<V> {
    /// Every value reachable from `start` along outgoing arcs, in BFS order.
    ///
    /// On an undirected graph this is the connected component of `start`;
    /// on a directed graph it is the forward-reachable set only.
    pub fn component(&self, start: &V) -> GraphResult<Vec<&V>> {
        self.bfs(start)
    }

    /// All components, discovered from vertices in insertion order.
    ///
    /// Each vertex not yet claimed by an earlier component seeds a BFS whose
    /// visited values form the next component. Isolated vertices become
    /// singletons. Components are disjoint on undirected graphs; on directed
    /// graphs a later component may repeat vertices reached earlier.
    pub fn ucc(&self) -> Vec<Vec<&V>> {
        let mut claimed: HashSet<&V> = HashSet::new();
        let mut components = Vec::new();

        for vertex in self.vertexes() {
            if claimed.contains(vertex) {
                continue;
            }
            // The seed comes from the vertex set, so it always resolves.
            let Ok(members) = self.bfs(vertex) else {
                continue;
            };
            claimed.extend(members.iter().copied());
            components.push(members);
        }

        debug!("ucc found {} components", components.len());
        components
    }
}
