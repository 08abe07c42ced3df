//! Traversal statistics and run reports.
//!
//! [`Stats`] counts the work done by one worker (or one sequential run) and is
//! merged across workers at each level barrier. [`Report`] is the harness's
//! summary of a sequential-vs-parallel comparison.

mod report;
mod stats;
pub use report::*;
pub use stats::*;
