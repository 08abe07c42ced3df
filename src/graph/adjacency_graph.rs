use crate::{
    graph::NodeId,
    sets::fixed::{FixedSet, FlatFixedSet},
};

/// In-memory adjacency-list graph traversed by the BFS engines.
///
/// # Invariants
/// - `adjacency[i]` holds the out-neighbors of vertex `i`.
/// - Every neighbor list is sorted, duplicate-free and never contains `i` itself.
/// - Every neighbor index is a valid index into `adjacency`.
/// - The graph has at least one vertex.
///
/// Undirected graphs store each edge in both endpoint lists. Once built the
/// graph is never mutated, so any number of threads may read it concurrently.
pub struct AdjacencyGraph {
    adjacency: Vec<FlatFixedSet>,
    directed: bool,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Assembles a graph from already-normalized neighbor lists.
    /// Only [`GraphBuilder`](crate::graph::GraphBuilder) calls this.
    pub(crate) fn from_parts(adjacency: Vec<FlatFixedSet>, directed: bool) -> Self {
        let edge_count = adjacency.iter().map(|n| n.len()).sum();
        Self {
            adjacency,
            directed,
            edge_count,
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Always `false` for a built graph; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of stored adjacency entries. For undirected graphs each edge
    /// is counted once per endpoint.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.adjacency.len()
    }

    /// Out-neighbors of `node`, in ascending order.
    ///
    /// # Panics
    /// If `node` is not a vertex of this graph.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency[node.index()].as_slice()
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency[node.index()].len()
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.contains(from) && self.adjacency[from.index()].contains(to)
    }

    /// Every stored `(from, to)` pair, grouped by `from` in ascending order.
    pub fn iter_edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(from, set)| {
            let from = NodeId::new(from as u32);
            set.as_slice().iter().map(move |&to| (from, to))
        })
    }
}

impl std::fmt::Debug for AdjacencyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjacencyGraph")
            .field("vertices", &self.len())
            .field("edges", &self.edge_count)
            .field("directed", &self.directed)
            .finish()
    }
}
