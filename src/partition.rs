use std::ops::RangeInclusive;

use serde::Serialize;

use crate::{QueensError, Result};

/// Rows a worker may use for the queen of column 0.
///
/// The range is closed and never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartitionRange {
    /// First row, inclusive.
    pub start: usize,
    /// Last row, inclusive.
    pub end: usize,
}

impl PartitionRange {
    /// The unrestricted range `0..=n-1` used by the sequential search.
    pub fn full(n: usize) -> Self {
        PartitionRange {
            start: 0,
            end: n.saturating_sub(1),
        }
    }

    /// Iterates over the rows of the range.
    pub fn rows(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Splits the column-0 rows of an `n`×`n` board among `threads` workers.
///
/// Every worker gets `n / threads` rows; the last one also takes the
/// remainder. The ranges are disjoint and cover `0..n` exactly once, which
/// is what lets every worker search without sharing state.
///
/// # Errors
///
/// Returns `InvalidParameterValue` unless `1 <= threads <= n`.
pub fn partition(n: usize, threads: usize) -> Result<Vec<PartitionRange>> {
    if threads == 0 || threads > n {
        return Err(QueensError::InvalidParameterValue(format!(
            "{threads} threads for {n} queens"
        )));
    }

    let base = n / threads;
    let mut ranges = Vec::new();
    ranges.try_reserve_exact(threads)?;
    ranges.extend((0..threads).map(|i| PartitionRange {
        start: i * base,
        end: if i == threads - 1 {
            n - 1
        } else {
            (i + 1) * base - 1
        },
    }));
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_worker_takes_remainder() {
        let ranges = partition(8, 3).unwrap();
        assert_eq!(
            ranges,
            vec![
                PartitionRange { start: 0, end: 1 },
                PartitionRange { start: 2, end: 3 },
                PartitionRange { start: 4, end: 7 },
            ]
        );
    }

    #[test]
    fn ranges_cover_every_row_once() {
        for n in 1..=20 {
            for threads in 1..=n {
                let ranges = partition(n, threads).unwrap();
                assert_eq!(ranges.len(), threads);
                let rows: Vec<usize> = ranges.iter().flat_map(|r| r.rows()).collect();
                assert_eq!(rows, (0..n).collect::<Vec<_>>(), "n={n} threads={threads}");
            }
        }
    }

    #[test]
    fn rejects_out_of_domain_thread_counts() {
        assert!(matches!(
            partition(4, 0),
            Err(QueensError::InvalidParameterValue(_))
        ));
        assert!(partition(4, 5).is_err());
        assert!(partition(0, 1).is_err());
    }
}
