//! CLI support for the `vgraph` binary.

pub mod commands;
