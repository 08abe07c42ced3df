use std::{
    num::NonZeroUsize,
    sync::atomic::{AtomicI32, AtomicUsize, Ordering},
    thread,
};

use tracing::{debug, trace};

use crate::{
    error::{GraphError, Result},
    graph::{AdjacencyGraph, NodeId},
    sets::visited::AtomicVisitedSet,
    statistics::Stats,
    traversal::{
        EDGE_CHUNK, FrontierChunk, Traversal, UNREACHED, check_start, edge_balanced_chunks,
        frontier_edges,
    },
};

/// Worker count used when none is configured: the host's available
/// parallelism, or 1 if it cannot be determined.
pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Level-synchronous parallel BFS from `start` using up to `workers` threads.
///
/// Restricted to reachable vertices, the returned levels are identical to
/// those of [`traverse_sequential`](crate::traversal::traverse_sequential)
/// for any worker count and any scheduling. The order lists every level
/// before the next one, but vertices within a level may be permuted.
///
/// # Errors
/// - [`GraphError::StartOutOfRange`] if `start` is not a vertex of `graph`.
/// - [`GraphError::NoWorkers`] if `workers == 0`.
pub fn traverse_parallel(
    graph: &AdjacencyGraph,
    start: NodeId,
    workers: usize,
) -> Result<Traversal> {
    traverse_parallel_with_stats(graph, start, workers).map(|(traversal, _)| traversal)
}

/// [`traverse_parallel`], also returning the merged per-worker counters.
pub fn traverse_parallel_with_stats(
    graph: &AdjacencyGraph,
    start: NodeId,
    workers: usize,
) -> Result<(Traversal, Stats)> {
    traverse_parallel_with_chunk_size(graph, start, workers, EDGE_CHUNK)
}

/// [`traverse_parallel_with_stats`] with an explicit work target per chunk,
/// in adjacency entries (see [`edge_balanced_chunks`]). Smaller chunks spread
/// even small frontiers over several workers.
pub fn traverse_parallel_with_chunk_size(
    graph: &AdjacencyGraph,
    start: NodeId,
    workers: usize,
    chunk_size: usize,
) -> Result<(Traversal, Stats)> {
    check_start(graph, start)?;
    if workers == 0 {
        return Err(GraphError::NoWorkers);
    }

    let n = graph.len();
    let visited = AtomicVisitedSet::new(n);
    let levels: Vec<AtomicI32> = (0..n).map(|_| AtomicI32::new(UNREACHED)).collect();
    let mut order = Vec::with_capacity(n);
    let mut stats = Stats::new();

    visited.claim(start.index());
    levels[start.index()].store(0, Ordering::Relaxed);
    let mut frontier = vec![start];
    let mut depth = 0;

    while !frontier.is_empty() {
        order.extend_from_slice(&frontier);

        let chunks = edge_balanced_chunks(graph, &frontier, chunk_size);
        let level = LevelExpansion {
            graph,
            frontier: &frontier,
            chunks: &chunks,
            visited: &visited,
            levels: &levels,
            next_level: depth + 1,
        };
        let active = workers.min(chunks.len());
        let (next, level_stats) = if active <= 1 {
            level.run_inline()
        } else {
            level.run_scoped(active)
        };

        debug!(
            level = depth,
            frontier = frontier.len(),
            edges = frontier_edges(graph, &frontier),
            chunks = chunks.len(),
            workers = active,
            discovered = next.len(),
            "expanded level"
        );

        stats = stats.merge(&level_stats);
        stats.bump_levels();
        frontier = next;
        depth += 1;
    }

    let levels = levels.into_iter().map(AtomicI32::into_inner).collect();
    Ok((Traversal { order, levels }, stats))
}

/// Everything the workers of one level share. All of it is read-only except
/// `visited`, mutated through atomic claims, and `levels`, whose slots are
/// written only by the worker that won the claim on that vertex.
struct LevelExpansion<'a> {
    graph: &'a AdjacencyGraph,
    frontier: &'a [NodeId],
    chunks: &'a [FrontierChunk],
    visited: &'a AtomicVisitedSet,
    levels: &'a [AtomicI32],
    next_level: i32,
}

impl LevelExpansion<'_> {
    /// Expands the whole level on the calling thread.
    fn run_inline(&self) -> (Vec<NodeId>, Stats) {
        let cursor = AtomicUsize::new(0);
        let mut discovered = Vec::new();
        let mut stats = Stats::new();
        self.drain_chunks(&cursor, &mut discovered, &mut stats);
        (discovered, stats)
    }

    /// Forks `workers` scoped threads that pull chunks from a shared cursor,
    /// then joins them. The join is the level barrier: once it returns every
    /// claim and level write of this level is visible to the caller.
    ///
    /// Buffers are concatenated in worker-spawn order.
    fn run_scoped(&self, workers: usize) -> (Vec<NodeId>, Stats) {
        let cursor = AtomicUsize::new(0);

        thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|worker| {
                    let cursor = &cursor;
                    scope.spawn(move || {
                        let mut discovered = Vec::new();
                        let mut stats = Stats::new();
                        self.drain_chunks(cursor, &mut discovered, &mut stats);
                        trace!(worker, discovered = discovered.len(), "worker done");
                        (discovered, stats)
                    })
                })
                .collect();

            let mut next = Vec::new();
            let mut combined = Stats::new();
            for handle in handles {
                let (discovered, stats) = handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
                next.extend(discovered);
                combined = combined.merge(&stats);
            }
            (next, combined)
        })
    }

    /// Claims chunks until none are left, exploring every neighbor slice
    /// they cover.
    fn drain_chunks(
        &self,
        cursor: &AtomicUsize,
        discovered: &mut Vec<NodeId>,
        stats: &mut Stats,
    ) {
        loop {
            let chunk = cursor.fetch_add(1, Ordering::Relaxed);
            match self.chunks.get(chunk) {
                None => break,
                Some(FrontierChunk::Vertices(range)) => {
                    for &u in &self.frontier[range.clone()] {
                        self.scan(self.graph.neighbors(u), discovered, stats);
                    }
                }
                Some(FrontierChunk::Neighbors { vertex, edges }) => {
                    let neighbors = self.graph.neighbors(self.frontier[*vertex]);
                    self.scan(&neighbors[edges.clone()], discovered, stats);
                }
            }
        }
    }

    #[inline]
    fn scan(&self, neighbors: &[NodeId], discovered: &mut Vec<NodeId>, stats: &mut Stats) {
        stats.bump_edges(neighbors.len());

        for &v in neighbors {
            // skip the read-modify-write when the bit is already visible
            if self.visited.is_claimed(v.index()) || !self.visited.claim(v.index()) {
                stats.bump_claims_lost();
                continue;
            }

            let previous = self.levels[v.index()].swap(self.next_level, Ordering::Relaxed);
            debug_assert_eq!(previous, UNREACHED, "level of vertex {v} written twice");
            discovered.push(v);
            stats.bump_claims_won();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::{GraphBuilder, generate_random_graph},
        traversal::{
            fixtures::{binary_tree, graph, path, star},
            traverse_sequential, verify_levels,
        },
    };

    const WORKER_COUNTS: [usize; 4] = [1, 2, 8, 16];

    fn sorted(mut ids: Vec<NodeId>) -> Vec<NodeId> {
        ids.sort();
        ids
    }

    #[test]
    fn single_vertex() {
        let g = GraphBuilder::new(1, false).unwrap().build();
        for workers in WORKER_COUNTS {
            let t = traverse_parallel(&g, NodeId::new(0), workers).unwrap();
            assert_eq!(t.order, vec![NodeId::new(0)]);
            assert_eq!(t.levels, vec![0]);
        }
    }

    #[test]
    fn path_graph() {
        for workers in WORKER_COUNTS {
            let t = traverse_parallel(&path(4), NodeId::new(0), workers).unwrap();
            assert_eq!(t.levels, vec![0, 1, 2, 3]);
            assert_eq!(t.order, [0, 1, 2, 3].map(NodeId::new).to_vec());
        }
    }

    #[test]
    fn star_graph_order_starts_with_center() {
        let leaves = 5000;
        let g = star(leaves);
        for workers in WORKER_COUNTS {
            let t = traverse_parallel(&g, NodeId::new(0), workers).unwrap();
            assert_eq!(t.levels[0], 0);
            assert!(t.levels[1..].iter().all(|&l| l == 1));
            assert_eq!(t.order[0], NodeId::new(0));
            let expected: Vec<NodeId> = (1..=leaves as u32).map(NodeId::new).collect();
            assert_eq!(sorted(t.order[1..].to_vec()), expected);
        }
    }

    #[test]
    fn directed_chain() {
        let g = graph(3, true, &[(0, 1), (1, 2)]);
        for workers in WORKER_COUNTS {
            let t = traverse_parallel(&g, NodeId::new(0), workers).unwrap();
            assert_eq!(t.levels, vec![0, 1, 2]);
            let t = traverse_parallel(&g, NodeId::new(2), workers).unwrap();
            assert_eq!(t.levels, vec![UNREACHED, UNREACHED, 0]);
            assert_eq!(t.order, vec![NodeId::new(2)]);
        }
    }

    #[test]
    fn disconnected_components() {
        let g = graph(4, false, &[(0, 1), (2, 3)]);
        for workers in WORKER_COUNTS {
            let t = traverse_parallel(&g, NodeId::new(0), workers).unwrap();
            assert_eq!(t.levels, vec![0, 1, UNREACHED, UNREACHED]);
            assert_eq!(t.reached(), 2);
        }
    }

    #[test]
    fn order_is_grouped_by_level() {
        let g = binary_tree(20_000);
        let t = traverse_parallel(&g, NodeId::new(0), 8).unwrap();
        let along_order: Vec<i32> = t.order.iter().map(|v| t.levels[v.index()]).collect();
        assert!(along_order.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn matches_sequential_on_random_graphs() {
        for (seed, directed) in [(1, false), (2, true), (3, false)] {
            let g = generate_random_graph(5000, 6, directed, seed).unwrap();
            let oracle = traverse_sequential(&g, NodeId::new(0)).unwrap();
            for workers in WORKER_COUNTS {
                let t = traverse_parallel(&g, NodeId::new(0), workers).unwrap();
                assert!(verify_levels(&oracle.levels, &t.levels));
                assert_eq!(t.levels, oracle.levels);
                assert_eq!(sorted(t.order), sorted(oracle.order.clone()));
            }
        }
    }

    #[test]
    fn stats_account_for_every_edge() {
        let g = generate_random_graph(3000, 8, false, 9).unwrap();
        let (t, stats) = traverse_parallel_with_stats(&g, NodeId::new(0), 4).unwrap();
        assert_eq!(stats.get_claims_won() + 1, t.reached());
        assert_eq!(
            stats.get_claims_won() + stats.get_claims_lost(),
            stats.get_edges_scanned()
        );
        assert_eq!(stats.get_levels() as u32, t.depth() + 1);
    }

    #[test]
    fn hub_edges_spread_over_workers() {
        let leaves = 4 * EDGE_CHUNK + 17;
        let g = star(leaves);
        let chunks = edge_balanced_chunks(&g, &[NodeId::new(0)], EDGE_CHUNK);
        assert!(chunks.len() > 1);

        let (t, stats) = traverse_parallel_with_stats(&g, NodeId::new(0), 8).unwrap();
        assert_eq!(t.levels[0], 0);
        assert!(t.levels[1..].iter().all(|&l| l == 1));
        assert_eq!(t.reached(), leaves + 1);
        assert_eq!(stats.get_claims_won(), leaves);
        assert_eq!(stats.get_edges_scanned(), g.edge_count());
    }

    #[test]
    fn tiny_chunks_race_on_shared_neighbors() {
        // dense graph: every frontier vertex shares most neighbors with the others
        let g = generate_random_graph(400, 60, false, 5).unwrap();
        let oracle = traverse_sequential(&g, NodeId::new(0)).unwrap();
        for chunk_size in [1, 4, 64] {
            for workers in WORKER_COUNTS {
                let (t, stats) =
                    traverse_parallel_with_chunk_size(&g, NodeId::new(0), workers, chunk_size)
                        .unwrap();
                assert_eq!(t.levels, oracle.levels);
                assert_eq!(sorted(t.order), sorted(oracle.order.clone()));
                assert_eq!(stats.get_claims_won() + 1, oracle.reached());
            }
        }
    }

    #[test]
    fn zero_workers_rejected() {
        let err = traverse_parallel(&path(2), NodeId::new(0), 0).unwrap_err();
        assert!(matches!(err, GraphError::NoWorkers));
    }

    #[test]
    fn start_out_of_range_rejected() {
        let err = traverse_parallel(&path(2), NodeId::new(7), 4).unwrap_err();
        assert!(matches!(
            err,
            GraphError::StartOutOfRange { start: 7, len: 2 }
        ));
    }

    #[test]
    fn default_workers_is_positive() {
        assert!(default_workers() >= 1);
    }
}
