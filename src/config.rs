//! Harness configuration: where the graph comes from and how the engines run.

use std::path::PathBuf;

use crate::{
    error::{GraphError, Result},
    fs::load_edge_list_from_path,
    graph::{AdjacencyGraph, NodeId, generate_random_graph},
};

/// Origin of the graph under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    /// Random graph from [`generate_random_graph`].
    Synthetic {
        n: usize,
        avg_degree: usize,
        seed: u64,
    },
    /// Edge-list file describing a graph of `n` vertices.
    EdgeList { path: PathBuf, n: usize },
}

impl GraphSource {
    pub fn vertex_count(&self) -> usize {
        match self {
            GraphSource::Synthetic { n, .. } | GraphSource::EdgeList { n, .. } => *n,
        }
    }
}

/// A full comparison run: one graph, one start vertex, and one parallel run
/// per entry of `threads`.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: GraphSource,
    pub directed: bool,
    pub start: u32,
    pub iters: usize,
    pub threads: Vec<usize>,
}

impl RunConfig {
    /// Rejects parameters no run could succeed with, before any graph is built.
    pub fn validate(&self) -> Result<()> {
        let n = self.source.vertex_count();
        if n == 0 {
            return Err(GraphError::InvalidConfig(
                "vertex count must be positive".to_string(),
            ));
        }
        if self.start as usize >= n {
            return Err(GraphError::InvalidConfig(format!(
                "start vertex {} must be below vertex count {n}",
                self.start
            )));
        }
        if self.iters == 0 {
            return Err(GraphError::InvalidConfig(
                "iteration count must be positive".to_string(),
            ));
        }
        if self.threads.is_empty() {
            return Err(GraphError::InvalidConfig(
                "at least one thread count is required".to_string(),
            ));
        }
        if self.threads.contains(&0) {
            return Err(GraphError::InvalidConfig(
                "thread counts must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn start_node(&self) -> NodeId {
        NodeId::new(self.start)
    }

    /// Generates or loads the graph described by `source`.
    pub fn build_graph(&self) -> Result<AdjacencyGraph> {
        match &self.source {
            GraphSource::Synthetic {
                n,
                avg_degree,
                seed,
            } => generate_random_graph(*n, *avg_degree, self.directed, *seed),
            GraphSource::EdgeList { path, n } => {
                load_edge_list_from_path(path, *n, self.directed)
            }
        }
    }
}
