//! Derived algorithms — components and topological ordering.

pub mod components;
pub mod topo;
