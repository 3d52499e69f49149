//! UI components.

pub mod tree_graph;
