use crate::{
    error::Result,
    graph::{AdjacencyGraph, NodeId},
    sets::visited::{UncompressedSet, VisitorSet},
    statistics::Stats,
    traversal::{Traversal, UNREACHED, check_start},
};

/// Single-threaded BFS from `start`.
///
/// Serves as the correctness oracle and timing baseline for
/// [`traverse_parallel`](crate::traversal::traverse_parallel).
///
/// # Errors
/// [`GraphError::StartOutOfRange`](crate::error::GraphError::StartOutOfRange)
/// if `start` is not a vertex of `graph`.
pub fn traverse_sequential(graph: &AdjacencyGraph, start: NodeId) -> Result<Traversal> {
    traverse_sequential_with_stats(graph, start).map(|(traversal, _)| traversal)
}

/// [`traverse_sequential`], also returning the work counters of the run.
pub fn traverse_sequential_with_stats(
    graph: &AdjacencyGraph,
    start: NodeId,
) -> Result<(Traversal, Stats)> {
    check_start(graph, start)?;

    let n = graph.len();
    let mut visited = UncompressedSet::new(n);
    let mut levels = vec![UNREACHED; n];
    let mut stats = Stats::new();

    // the queue doubles as the visitation order: vertices are appended when
    // claimed and never removed, `head` marks the next one to expand
    let mut queue = Vec::with_capacity(n);
    visited.set(start.index());
    levels[start.index()] = 0;
    queue.push(start);

    let mut head = 0;
    let mut current_level = UNREACHED;
    while let Some(&u) = queue.get(head) {
        head += 1;
        // levels leave the FIFO queue in nondecreasing order
        if levels[u.index()] > current_level {
            current_level = levels[u.index()];
            stats.bump_levels();
        }
        let next_level = current_level + 1;

        let neighbors = graph.neighbors(u);
        stats.bump_edges(neighbors.len());
        for &v in neighbors {
            if visited.claim(v.index()) {
                levels[v.index()] = next_level;
                queue.push(v);
                stats.bump_claims_won();
            } else {
                stats.bump_claims_lost();
            }
        }
    }

    let traversal = Traversal {
        order: queue,
        levels,
    };
    Ok((traversal, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::GraphError,
        graph::GraphBuilder,
        traversal::fixtures::{binary_tree, graph, path, star},
    };

    fn ids(raw: &[u32]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn single_vertex() {
        let g = GraphBuilder::new(1, false).unwrap().build();
        let t = traverse_sequential(&g, NodeId::new(0)).unwrap();
        assert_eq!(t.order, ids(&[0]));
        assert_eq!(t.levels, vec![0]);
    }

    #[test]
    fn path_graph() {
        let t = traverse_sequential(&path(4), NodeId::new(0)).unwrap();
        assert_eq!(t.levels, vec![0, 1, 2, 3]);
        assert_eq!(t.order, ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn path_graph_from_middle() {
        let t = traverse_sequential(&path(5), NodeId::new(2)).unwrap();
        assert_eq!(t.levels, vec![2, 1, 0, 1, 2]);
        // neighbor lists are sorted, so lower indices are discovered first
        assert_eq!(t.order, ids(&[2, 1, 3, 0, 4]));
    }

    #[test]
    fn star_graph() {
        let t = traverse_sequential(&star(6), NodeId::new(0)).unwrap();
        assert_eq!(t.levels, vec![0, 1, 1, 1, 1, 1, 1]);
        assert_eq!(t.order[0], NodeId::new(0));
        assert_eq!(t.reached(), 7);
    }

    #[test]
    fn directed_chain() {
        let g = graph(3, true, &[(0, 1), (1, 2)]);
        let from_zero = traverse_sequential(&g, NodeId::new(0)).unwrap();
        assert_eq!(from_zero.levels, vec![0, 1, 2]);

        let from_two = traverse_sequential(&g, NodeId::new(2)).unwrap();
        assert_eq!(from_two.levels, vec![UNREACHED, UNREACHED, 0]);
        assert_eq!(from_two.order, ids(&[2]));
    }

    #[test]
    fn disconnected_components() {
        let g = graph(4, false, &[(0, 1), (2, 3)]);
        let t = traverse_sequential(&g, NodeId::new(0)).unwrap();
        assert_eq!(t.levels, vec![0, 1, UNREACHED, UNREACHED]);
        assert_eq!(t.order, ids(&[0, 1]));
    }

    #[test]
    fn shortest_path_wins_over_discovery_order() {
        // 0-1-2-3 plus shortcut 0-3
        let g = graph(4, false, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
        let t = traverse_sequential(&g, NodeId::new(0)).unwrap();
        assert_eq!(t.levels, vec![0, 1, 2, 1]);
    }

    #[test]
    fn stats_count_work() {
        let g = binary_tree(15);
        let (t, stats) = traverse_sequential_with_stats(&g, NodeId::new(0)).unwrap();
        assert_eq!(t.depth(), 3);
        assert_eq!(stats.get_levels(), 4);
        assert_eq!(stats.get_claims_won(), 14);
        assert_eq!(stats.get_edges_scanned(), g.edge_count());
        assert_eq!(
            stats.get_claims_won() + stats.get_claims_lost(),
            stats.get_edges_scanned()
        );
    }

    #[test]
    fn stats_count_levels_while_draining() {
        let (_, isolated) =
            traverse_sequential_with_stats(&graph(3, false, &[]), NodeId::new(1)).unwrap();
        assert_eq!(isolated.get_levels(), 1);

        let (t, long) = traverse_sequential_with_stats(&path(50), NodeId::new(0)).unwrap();
        assert_eq!(long.get_levels(), 50);
        assert_eq!(long.get_levels(), t.level_sizes().len());

        // unreached vertices add no level
        let split = graph(6, false, &[(0, 1), (1, 2), (3, 4), (4, 5)]);
        let (_, half) = traverse_sequential_with_stats(&split, NodeId::new(3)).unwrap();
        assert_eq!(half.get_levels(), 3);
    }

    #[test]
    fn start_out_of_range_rejected() {
        let err = traverse_sequential(&path(3), NodeId::new(3)).unwrap_err();
        assert!(matches!(
            err,
            GraphError::StartOutOfRange { start: 3, len: 3 }
        ));
    }
}
