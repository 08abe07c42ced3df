use hashbrown::HashSet;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

use crate::{
    error::Result,
    graph::{AdjacencyGraph, GraphBuilder},
};

/// Builds a random graph in which every vertex draws `avg_degree` distinct
/// neighbors uniformly at random.
///
/// `avg_degree` is clamped to `n - 1`, the most a simple graph allows. For
/// undirected graphs each draw also adds the reverse edge, so the final
/// degrees are on average about twice the requested value.
///
/// The same `(n, avg_degree, directed, seed)` always produces the same graph.
pub fn generate_random_graph(
    n: usize,
    avg_degree: usize,
    directed: bool,
    seed: u64,
) -> Result<AdjacencyGraph> {
    let mut builder = GraphBuilder::new(n, directed)?;
    let avg_degree = avg_degree.min(n - 1);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::with_capacity(avg_degree);
    // drawn targets are sorted before insertion, so the graph does not depend
    // on the hash set's iteration order
    let mut drawn = Vec::with_capacity(avg_degree);

    for u in 0..n {
        seen.clear();
        while seen.len() < avg_degree {
            let v = rng.random_range(0..n);
            if v != u {
                seen.insert(v);
            }
        }
        drawn.clear();
        drawn.extend(seen.iter().copied());
        drawn.sort_unstable();
        for &v in &drawn {
            builder.add_edge(u, v)?;
        }
    }

    let graph = builder.build();
    info!(
        vertices = graph.len(),
        edges = graph.edge_count(),
        directed,
        seed,
        "generated random graph"
    );
    Ok(graph)
}
