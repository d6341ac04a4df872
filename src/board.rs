use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Returns `true` if a queen at `candidate_row` does not attack a queen
/// at `placed_row` that sits `column_distance` columns to the left.
pub fn is_safe(candidate_row: usize, placed_row: usize, column_distance: usize) -> bool {
    candidate_row != placed_row && candidate_row.abs_diff(placed_row) != column_distance
}

/// Queen positions of one in-progress search, indexed by column.
///
/// Each execution owns exactly one context. Entries past the current
/// column are stale and are overwritten before they are read again.
#[derive(Debug)]
pub struct SearchContext {
    rows: Vec<usize>,
}

impl SearchContext {
    /// Allocates a context for an `n`×`n` board.
    ///
    /// # Errors
    ///
    /// Returns `ResourceExhaustion` if the row buffer cannot be allocated.
    pub fn new(n: usize) -> Result<Self> {
        let mut rows = Vec::new();
        rows.try_reserve_exact(n)?;
        rows.resize(n, 0);
        Ok(SearchContext { rows })
    }

    /// Board size.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Checks `row` for column `col` against every queen in columns `0..col`.
    ///
    /// Stops at the first conflict.
    pub fn accepts(&self, row: usize, col: usize) -> bool {
        self.rows[..col]
            .iter()
            .enumerate()
            .all(|(k, &placed)| is_safe(row, placed, col - k))
    }

    /// Places the queen of column `col` on `row`.
    pub fn place(&mut self, col: usize, row: usize) {
        self.rows[col] = row;
    }

    /// Rows of all placed queens, indexed by column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }
}

/// One complete placement, kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionSnapshot {
    /// Row of the queen in each column.
    rows: Vec<usize>,
}

impl SolutionSnapshot {
    pub(crate) fn from_rows(rows: Vec<usize>) -> Self {
        SolutionSnapshot { rows }
    }

    /// Board size.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Row of the queen in each column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Returns `true` if a queen stands on (`row`, `col`).
    pub fn is_queen(&self, row: usize, col: usize) -> bool {
        self.rows.get(col) == Some(&row)
    }

    /// The `n`×`n` grid of cells, `true` where a queen stands.
    pub fn grid(&self) -> Vec<Vec<bool>> {
        let n = self.size();
        (0..n)
            .map(|row| (0..n).map(|col| self.is_queen(row, col)).collect())
            .collect()
    }

    /// Returns `true` if no two queens share a row, column or diagonal.
    pub fn is_valid(&self) -> bool {
        let n = self.size();
        self.rows.iter().all(|&row| row < n)
            && (1..n).all(|col| {
                (0..col).all(|k| is_safe(self.rows[col], self.rows[k], col - k))
            })
    }
}

impl fmt::Display for SolutionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid() {
            for queen in row {
                f.write_str(if queen { " Q " } else { " + " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
