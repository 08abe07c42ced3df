//! Immutable neighbor sets for graph vertices.
//!
//! This module provides the normalized, read-only neighbor list stored for each
//! vertex of an [`AdjacencyGraph`](crate::graph::AdjacencyGraph).

mod fixed_set;

pub use fixed_set::*;
