//! Specialized set structures for graph traversal.
//!
//! # Submodules
//!
//! - [`fixed`]: Immutable, sorted neighbor sets for graph vertices
//! - [`visited`]: Bitmap-based visited markers, including an atomic variant
//!   whose claim operation lets many workers race on the same vertex

pub mod fixed;
pub mod visited;
