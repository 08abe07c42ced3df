//! Immutable adjacency-list graph store.
//!
//! Graphs are assembled through a [`GraphBuilder`], which normalizes every
//! neighbor list (sorted, deduplicated, no self-loops), and frozen into an
//! [`AdjacencyGraph`] that traversal engines only ever borrow.

mod adjacency_graph;
mod builder;
mod generator;
mod node;

pub use adjacency_graph::*;
pub use builder::*;
pub use generator::*;
pub use node::*;
