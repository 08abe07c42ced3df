pub mod config;
pub mod error;
pub mod fs;
pub mod graph;
pub mod logging;
pub mod sets;
pub mod statistics;
pub mod traversal;

pub use error::{GraphError, Result};
pub use graph::{AdjacencyGraph, GraphBuilder, NodeId};
pub use traversal::{Traversal, traverse_parallel, traverse_sequential, verify_levels};
