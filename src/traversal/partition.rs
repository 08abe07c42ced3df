use std::ops::Range;

use crate::graph::{AdjacencyGraph, NodeId};

/// Target work per chunk handed to a parallel worker, in adjacency entries.
pub const EDGE_CHUNK: usize = 2048;

/// A unit of work handed to one parallel worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontierChunk {
    /// Frontier positions whose neighbor lists are scanned in full.
    Vertices(Range<usize>),
    /// A slice of the neighbor list of the vertex at frontier position `vertex`.
    Neighbors { vertex: usize, edges: Range<usize> },
}

impl FrontierChunk {
    /// Adjacency entries this chunk scans.
    pub fn edge_count(&self, graph: &AdjacencyGraph, frontier: &[NodeId]) -> usize {
        match self {
            FrontierChunk::Vertices(range) => frontier_edges(graph, &frontier[range.clone()]),
            FrontierChunk::Neighbors { edges, .. } => edges.len(),
        }
    }
}

/// Splits `frontier` into chunks of roughly `target` units of work each,
/// where a vertex costs its degree plus one.
///
/// Consecutive light vertices are grouped into [`FrontierChunk::Vertices`]
/// runs. A vertex whose cost exceeds `target` has its neighbor list cut into
/// [`FrontierChunk::Neighbors`] slices of at most `target` entries, so the
/// edges of a single hub are spread over several workers. Every adjacency
/// entry leaving `frontier` belongs to exactly one chunk, and the chunks are
/// empty only when `frontier` is.
pub fn edge_balanced_chunks(
    graph: &AdjacencyGraph,
    frontier: &[NodeId],
    target: usize,
) -> Vec<FrontierChunk> {
    let target = target.max(1);
    let mut chunks = Vec::new();
    let mut run_start = 0;
    let mut weight = 0;

    for (i, &node) in frontier.iter().enumerate() {
        let degree = graph.degree(node);
        let cost = degree + 1;

        if cost > target {
            if run_start < i {
                chunks.push(FrontierChunk::Vertices(run_start..i));
            }
            let mut from = 0;
            while from < degree {
                let to = (from + target).min(degree);
                chunks.push(FrontierChunk::Neighbors {
                    vertex: i,
                    edges: from..to,
                });
                from = to;
            }
            run_start = i + 1;
            weight = 0;
            continue;
        }

        if weight > 0 && weight + cost > target {
            chunks.push(FrontierChunk::Vertices(run_start..i));
            run_start = i;
            weight = 0;
        }
        weight += cost;
    }
    if run_start < frontier.len() {
        chunks.push(FrontierChunk::Vertices(run_start..frontier.len()));
    }
    chunks
}

/// Total adjacency entries leaving `frontier`.
pub fn frontier_edges(graph: &AdjacencyGraph, frontier: &[NodeId]) -> usize {
    frontier.iter().map(|&node| graph.degree(node)).sum()
}
