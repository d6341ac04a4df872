use log::debug;

use super::Solver;
use crate::partition::PartitionRange;
use crate::search::{Search, SearchOutcome};
use crate::Result;

/// Runs the whole search on the calling thread.
///
/// By default the first solution found is kept as a snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SequentialSolver {
    capture_first: bool,
}

impl SequentialSolver {
    /// Creates a solver that captures the first solution it finds.
    pub fn new() -> Self {
        SequentialSolver {
            capture_first: true,
        }
    }

    /// Enables or disables capturing the first solution.
    pub fn with_snapshot(mut self, capture_first: bool) -> Self {
        self.capture_first = capture_first;
        self
    }
}

impl Default for SequentialSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for SequentialSolver {
    fn solve(&self, queens: usize) -> Result<SearchOutcome> {
        debug!("Sequential search for {queens} queens");
        let mut search = Search::new(queens, PartitionRange::full(queens))?;
        if self.capture_first {
            search = search.capture_first()?;
        }
        Ok(search.run())
    }
}
