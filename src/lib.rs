#![deny(missing_docs)]

//! An N-Queens solution counter with sequential and fork-join parallel search.
//!
//! This library counts every placement of N non-attacking queens on an
//! N×N board by backtracking column by column. The parallel solver splits
//! the rows of the first column among a fixed number of workers, runs one
//! independent search per worker on a pluggable thread pool, and sums the
//! per-worker counts once all of them have finished.

mod board;
mod config;
mod error;
mod partition;
mod report;
mod search;
mod solvers;
/// Fork-join thread pool implementations for the parallel solver.
pub mod thread_pool;

pub use board::{is_safe, SearchContext, SolutionSnapshot};
pub use config::{Config, Resolved, DEFAULT_QUEENS, DEFAULT_THREADS};
pub use error::{QueensError, Result};
pub use partition::{partition, PartitionRange};
pub use report::{format_elapsed, Report};
pub use search::{Search, SearchOutcome};
pub use solvers::{ParallelSolver, SequentialSolver, Solver};
pub use thread_pool::{NaiveThreadPool, RayonThreadPool, SharedQueueThreadPool, ThreadPool};
