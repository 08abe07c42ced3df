//! File system I/O for graphs.
//!
//! Graphs travel on disk as plain-text edge lists: one `u v` pair of 0-based
//! vertex indices per line. Loaded edges go through the same
//! [`GraphBuilder`](crate::graph::GraphBuilder) as generated ones.

mod edge_list;

pub use edge_list::*;
