//! Breadth-first traversal engines and their cross-check.
//!
//! Both engines take an immutable [`AdjacencyGraph`] and a start vertex and
//! return a [`Traversal`]: the vertices in the order they were claimed and a
//! level (hop distance) per vertex, `-1` for unreached ones.
//!
//! - [`traverse_sequential`]: FIFO baseline, the correctness oracle.
//! - [`traverse_parallel`]: level-synchronous expansion over a pool of scoped
//!   workers, one fork-join per level.
//! - [`verify_levels`]: agreement check between two level arrays.

mod parallel;
mod partition;
mod result;
mod sequential;
mod verify;

pub use parallel::*;
pub use partition::*;
pub use result::*;
pub use sequential::*;
pub use verify::*;

use crate::{
    error::{GraphError, Result},
    graph::{AdjacencyGraph, NodeId},
};

/// Rejects a start vertex outside the graph before any traversal state exists.
pub(crate) fn check_start(graph: &AdjacencyGraph, start: NodeId) -> Result<()> {
    if graph.contains(start) {
        Ok(())
    } else {
        Err(GraphError::StartOutOfRange {
            start: start.index(),
            len: graph.len(),
        })
    }
}
