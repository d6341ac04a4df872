use log::debug;

use super::Solver;
use crate::partition::partition;
use crate::search::{Search, SearchOutcome};
use crate::thread_pool::ThreadPool;
use crate::{QueensError, Result};

/// Splits the board among a fixed number of workers and joins them.
///
/// Generic over the thread pool `P`, so the same partitioning runs on any
/// fork-join backend. Workers never see each other's state; the only
/// thing they produce is their own solution count.
pub struct ParallelSolver<P: ThreadPool> {
    pool: P,
    threads: usize,
}

impl<P: ThreadPool> ParallelSolver<P> {
    /// Creates a solver with `threads` workers backed by a new pool.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameterValue` if `threads` is zero, or the pool's
    /// error if it cannot be created.
    pub fn new(threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(QueensError::InvalidParameterValue(
                "at least one thread is required".to_string(),
            ));
        }
        Ok(ParallelSolver {
            pool: P::new(threads)?,
            threads,
        })
    }

    /// Number of workers each search is split into.
    pub fn threads(&self) -> usize {
        self.threads
    }
}

impl<P: ThreadPool> Solver for ParallelSolver<P> {
    /// Never captures a snapshot.
    fn solve(&self, queens: usize) -> Result<SearchOutcome> {
        let ranges = partition(queens, self.threads)?;

        let tasks: Vec<_> = ranges
            .into_iter()
            .enumerate()
            .map(|(worker, range)| {
                move || -> Result<u64> {
                    debug!("Worker {worker} searching rows {}..={}", range.start, range.end);
                    let outcome = Search::new(queens, range)?.run();
                    debug!("Worker {worker} found {} solutions", outcome.solutions);
                    Ok(outcome.solutions)
                }
            })
            .collect();

        // every slot has been joined by now
        let solutions = self
            .pool
            .join_all(tasks)?
            .into_iter()
            .sum::<Result<u64>>()?;

        Ok(SearchOutcome {
            solutions,
            snapshot: None,
        })
    }
}
