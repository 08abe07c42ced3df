use tracing::debug;

use crate::{
    error::{GraphError, Result},
    graph::{AdjacencyGraph, NodeId},
    sets::fixed::FlatFixedSet,
};

/// Accumulates edges for an [`AdjacencyGraph`] of a fixed vertex count.
///
/// Generated edges and edges read from a file both go through this type, so
/// the resulting graph is identical regardless of where the edges came from.
/// Self-loops are dropped on insertion; duplicates are collapsed by
/// [`build`](GraphBuilder::build).
pub struct GraphBuilder {
    lists: Vec<Vec<NodeId>>,
    directed: bool,
    self_loops: usize,
}

impl GraphBuilder {
    /// Prepares a builder for `n` vertices.
    ///
    /// Fails with [`GraphError::EmptyGraph`] when `n == 0` and with
    /// [`GraphError::TooManyVertices`] when `n` does not fit a [`NodeId`].
    pub fn new(n: usize, directed: bool) -> Result<Self> {
        if n == 0 {
            return Err(GraphError::EmptyGraph);
        }
        if u32::try_from(n).is_err() {
            return Err(GraphError::TooManyVertices(n));
        }
        Ok(Self {
            lists: vec![Vec::new(); n],
            directed,
            self_loops: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Records the edge `u -> v` (and `v -> u` for undirected graphs).
    ///
    /// Returns `Ok(false)` when the edge is a self-loop and was discarded.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        let len = self.lists.len();
        for vertex in [u, v] {
            if vertex >= len {
                return Err(GraphError::VertexOutOfRange { vertex, len });
            }
        }
        if u == v {
            self.self_loops += 1;
            return Ok(false);
        }

        self.lists[u].push(NodeId::new(v as u32));
        if !self.directed {
            self.lists[v].push(NodeId::new(u as u32));
        }
        Ok(true)
    }

    /// Adds every edge of `edges`, stopping at the first out-of-range endpoint.
    pub fn extend_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (u, v) in edges {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Freezes the builder: every neighbor list is sorted and deduplicated.
    pub fn build(self) -> AdjacencyGraph {
        if self.self_loops > 0 {
            debug!(self_loops = self.self_loops, "discarded self-loops");
        }
        let adjacency = self
            .lists
            .into_iter()
            .map(FlatFixedSet::from_unsorted)
            .collect();
        AdjacencyGraph::from_parts(adjacency, self.directed)
    }
}
