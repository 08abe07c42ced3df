use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use tracing::{debug, info};

use crate::{
    error::{GraphError, Result},
    graph::{AdjacencyGraph, GraphBuilder},
};

/// Reads an edge list for a graph of `n` vertices.
///
/// Each non-blank line holds two whitespace-separated non-negative integers.
/// Text after a `#` is ignored. Pairs with an endpoint outside `[0, n)` and
/// self-loops are skipped, duplicates collapse. Any other malformed line is an
/// error carrying its 1-based line number.
pub fn load_edge_list<R: BufRead>(reader: R, n: usize, directed: bool) -> Result<AdjacencyGraph> {
    let mut builder = GraphBuilder::new(n, directed)?;
    let mut out_of_range = 0usize;
    let mut read = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let Some((u, v)) = parse_line(&line, index + 1)? else {
            continue;
        };
        read += 1;
        if u >= n || v >= n {
            out_of_range += 1;
            continue;
        }
        builder.add_edge(u, v)?;
    }

    if out_of_range > 0 {
        debug!(out_of_range, "skipped edges with endpoints outside the graph");
    }
    let graph = builder.build();
    info!(
        vertices = graph.len(),
        edges = graph.edge_count(),
        lines = read,
        directed,
        "loaded edge list"
    );
    Ok(graph)
}

/// [`load_edge_list`] on the file at `path`.
pub fn load_edge_list_from_path(
    path: impl AsRef<Path>,
    n: usize,
    directed: bool,
) -> Result<AdjacencyGraph> {
    let file = File::open(path.as_ref())?;
    load_edge_list(BufReader::new(file), n, directed)
}

/// Writes `graph` as an edge list readable by [`load_edge_list`].
///
/// Undirected edges are written once, as `u v` with `u < v`.
pub fn write_edge_list<W: Write>(writer: W, graph: &AdjacencyGraph) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for (u, v) in graph.iter_edges() {
        if graph.is_directed() || u < v {
            writeln!(writer, "{u} {v}")?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn write_edge_list_to_path(path: impl AsRef<Path>, graph: &AdjacencyGraph) -> Result<()> {
    write_edge_list(File::create(path.as_ref())?, graph)
}

fn parse_line(line: &str, line_number: usize) -> Result<Option<(usize, usize)>> {
    let content = line.split('#').next().unwrap_or_default();
    let mut tokens = content.split_whitespace();

    let (first, second) = match (tokens.next(), tokens.next()) {
        (None, _) => return Ok(None),
        (Some(first), Some(second)) => (first, second),
        (Some(_), None) => {
            return Err(GraphError::Parse {
                line: line_number,
                message: "expected two vertex indices".to_string(),
            });
        }
    };
    if let Some(extra) = tokens.next() {
        return Err(GraphError::Parse {
            line: line_number,
            message: format!("unexpected trailing token `{extra}`"),
        });
    }

    let parse = |token: &str| {
        token.parse::<usize>().map_err(|e| GraphError::Parse {
            line: line_number,
            message: format!("invalid vertex index `{token}`: {e}"),
        })
    };
    Ok(Some((parse(first)?, parse(second)?)))
}
