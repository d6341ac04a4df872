use crate::board::{SearchContext, SolutionSnapshot};
use crate::partition::PartitionRange;
use crate::{QueensError, Result};

/// What a finished backtracking run found.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Number of complete placements.
    pub solutions: u64,
    /// First complete placement, if capture was enabled and one exists.
    pub snapshot: Option<SolutionSnapshot>,
}

/// A single-threaded depth-first search over the columns of one board.
///
/// The search owns its `SearchContext` and its result counter; nothing in
/// it is shared, so one `Search` per worker needs no synchronization.
#[derive(Debug)]
pub struct Search {
    ctx: SearchContext,
    first_rows: PartitionRange,
    solutions: u64,
    /// Buffer for the first solution, allocated up front when capturing.
    capture: Option<Vec<usize>>,
    captured: bool,
}

impl Search {
    /// Creates a search over an `n`×`n` board whose column-0 queen is
    /// restricted to `first_rows`. Later columns are unrestricted.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameterValue` for an empty board or a range that
    /// leaves the board, and `ResourceExhaustion` if allocation fails.
    pub fn new(n: usize, first_rows: PartitionRange) -> Result<Self> {
        if n == 0 || first_rows.start > first_rows.end || first_rows.end >= n {
            return Err(QueensError::InvalidParameterValue(format!(
                "rows {}..={} on a {n}x{n} board",
                first_rows.start, first_rows.end
            )));
        }
        Ok(Search {
            ctx: SearchContext::new(n)?,
            first_rows,
            solutions: 0,
            capture: None,
            captured: false,
        })
    }

    /// Keeps a copy of the first complete placement found.
    ///
    /// # Errors
    ///
    /// Returns `ResourceExhaustion` if the snapshot buffer cannot be allocated.
    pub fn capture_first(mut self) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(self.ctx.size())?;
        self.capture = Some(buf);
        Ok(self)
    }

    /// Runs the search to exhaustion.
    pub fn run(mut self) -> SearchOutcome {
        self.backtrack(0);
        SearchOutcome {
            solutions: self.solutions,
            snapshot: self
                .capture
                .filter(|_| self.captured)
                .map(SolutionSnapshot::from_rows),
        }
    }

    fn backtrack(&mut self, col: usize) {
        let n = self.ctx.size();
        if col == n {
            self.record();
            return;
        }

        let rows = if col == 0 {
            self.first_rows.rows()
        } else {
            0..=n - 1
        };
        for row in rows {
            if !self.ctx.accepts(row, col) {
                continue;
            }
            self.ctx.place(col, row);
            self.backtrack(col + 1);
        }
    }

    fn record(&mut self) {
        self.solutions += 1;
        if self.captured {
            return;
        }
        if let Some(buf) = self.capture.as_mut() {
            buf.extend_from_slice(self.ctx.rows());
            self.captured = true;
        }
    }
}
