use crate::search::SearchOutcome;
use crate::Result;

/// Trait for an N-Queens solver.
///
/// Implementors count every placement of `queens` non-attacking queens on
/// a `queens`×`queens` board. All solvers agree on the count for a given
/// board size; they differ only in how the search is executed.
pub trait Solver {
    /// Searches the whole board and returns the number of solutions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameterValue` for an empty board, and whatever the
    /// execution strategy can fail with (allocation, panicking workers).
    fn solve(&self, queens: usize) -> Result<SearchOutcome>;
}

mod parallel;
mod sequential;

pub use self::parallel::ParallelSolver;
pub use self::sequential::SequentialSolver;
