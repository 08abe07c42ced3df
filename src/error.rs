//! Error types shared by graph construction, loading and traversal.

use thiserror::Error;

/// Everything that can be rejected before a traversal starts.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A graph needs at least one vertex.
    #[error("graph must contain at least one vertex")]
    EmptyGraph,

    /// The requested vertex count does not fit in the `u32` index space.
    #[error("graph of {0} vertices exceeds the supported index range")]
    TooManyVertices(usize),

    /// Traversal source is not a vertex of the graph.
    #[error("start vertex {start} out of range for graph of {len} vertices")]
    StartOutOfRange { start: usize, len: usize },

    /// An edge endpoint is not a vertex of the graph.
    #[error("vertex {vertex} out of range for graph of {len} vertices")]
    VertexOutOfRange { vertex: usize, len: usize },

    /// The parallel engine was asked to run with zero workers.
    #[error("worker count must be at least 1")]
    NoWorkers,

    /// Malformed line in an edge-list file.
    #[error("edge list line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Harness parameter rejected during validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
