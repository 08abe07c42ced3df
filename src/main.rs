use clap::Parser;
use frontier::{
    AdjacencyGraph,
    config::{GraphSource, RunConfig},
    fs::write_edge_list_to_path,
    logging::init_tracing,
    statistics::{LevelCheck, Report, Stats},
    traversal::{
        Traversal, default_workers, first_level_mismatch, reachability_agrees,
        traverse_parallel_with_stats, traverse_sequential_with_stats, verify_levels,
    },
};
use std::{
    error::Error,
    hint::black_box,
    path::PathBuf,
    process::ExitCode,
    time::{Duration, Instant},
};
use tracing::{error, info, warn};

/// Breadth-first search benchmark: sequential baseline vs. level-synchronous parallel BFS
#[derive(Parser, Debug)]
#[command(name = "frontier")]
#[command(about = "Compares sequential and parallel breadth-first search", long_about = None)]
struct Args {
    /// Number of vertices (also bounds vertex indices read from --file)
    #[arg(long, default_value_t = 10_000)]
    n: usize,

    /// Neighbors drawn per vertex by the random graph generator
    #[arg(long, default_value_t = 8)]
    deg: usize,

    /// Source vertex of the traversal
    #[arg(long, default_value_t = 0)]
    start: u32,

    /// Load an edge list ("u v" per line, 0-based) instead of generating a graph
    #[arg(long)]
    file: Option<PathBuf>,

    /// Seed of the random graph generator
    #[arg(long, env = "FRONTIER_SEED", default_value_t = 42)]
    seed: u64,

    /// Repetitions of each engine; reported times are per repetition
    #[arg(long, default_value_t = 1)]
    iters: usize,

    /// Treat edges as directed
    #[arg(long)]
    directed: bool,

    /// Worker counts for the parallel engine (comma-separated list, e.g., "1,2,4,8").
    /// Defaults to the available hardware parallelism.
    #[arg(short, long, env = "FRONTIER_THREADS", value_delimiter = ',')]
    threads: Vec<usize>,

    /// Write the graph as an edge list to this path before traversing
    #[arg(long)]
    dump_edges: Option<PathBuf>,

    /// Print each report as a JSON line instead of key=value lines
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn to_config(&self) -> RunConfig {
        let source = match &self.file {
            Some(path) => GraphSource::EdgeList {
                path: path.clone(),
                n: self.n,
            },
            None => GraphSource::Synthetic {
                n: self.n,
                avg_degree: self.deg,
                seed: self.seed,
            },
        };
        let threads = if self.threads.is_empty() {
            vec![default_workers()]
        } else {
            self.threads.clone()
        };
        RunConfig {
            source,
            directed: self.directed,
            start: self.start,
            iters: self.iters,
            threads,
        }
    }
}

/// Runs `traverse` `iters` times and returns the last result with the total
/// wall-clock time.
fn timed<F>(iters: usize, mut traverse: F) -> frontier::Result<(Traversal, Stats, Duration)>
where
    F: FnMut() -> frontier::Result<(Traversal, Stats)>,
{
    let start_time = Instant::now();
    let mut last = black_box(traverse()?);
    for _ in 1..iters {
        last = black_box(traverse()?);
    }
    let elapsed = start_time.elapsed();
    Ok((last.0, last.1, elapsed))
}

fn compare(
    graph: &AdjacencyGraph,
    config: &RunConfig,
    baseline: &(Traversal, Stats, Duration),
    threads: usize,
) -> frontier::Result<Report> {
    let (seq, seq_stats, seq_total) = baseline;
    let start = config.start_node();

    let (par, par_stats, par_total) = timed(config.iters, || {
        traverse_parallel_with_stats(graph, start, threads)
    })?;

    let consistent = verify_levels(&seq.levels, &par.levels);
    if let Some(mismatch) = first_level_mismatch(&seq.levels, &par.levels) {
        error!(
            threads,
            vertex = mismatch.vertex,
            sequential = mismatch.left,
            parallel = mismatch.right,
            "level mismatch between engines"
        );
    }
    if !reachability_agrees(&seq.levels, &par.levels) {
        warn!(
            threads,
            sequential = seq.reached(),
            parallel = par.reached(),
            "engines reached different vertex sets"
        );
    }

    Ok(
        Report::new(*seq_total, par_total, threads, config.iters)
            .with_check(LevelCheck::from_bool(consistent))
            .with_visited(seq.reached(), par.reached())
            .with_stats(*seq_stats, par_stats),
    )
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose, args.log_level.as_deref())?;

    let config = args.to_config();
    config.validate()?;

    // build or load the graph once, both engines share it
    let graph = config.build_graph()?;
    info!(?graph, "graph ready");

    if let Some(path) = &args.dump_edges {
        write_edge_list_to_path(path, &graph)?;
        info!(path = %path.display(), "wrote edge list");
    }

    let start = config.start_node();
    let baseline = timed(config.iters, || {
        traverse_sequential_with_stats(&graph, start)
    })?;
    info!(
        reached = baseline.0.reached(),
        depth = baseline.0.depth(),
        "sequential baseline done"
    );

    let mut all_consistent = true;
    for (job, &threads) in config.threads.iter().enumerate() {
        let report = compare(&graph, &config, &baseline, threads)?;
        all_consistent &= report.level_check.is_ok();

        if args.json {
            println!("{}", report.to_json()?);
        } else {
            if job > 0 {
                println!();
            }
            println!("{report}");
        }
    }

    Ok(if all_consistent {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
