use std::io::Write;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::board::SolutionSnapshot;
use crate::solvers::Solver;
use crate::Result;

/// Result of one timed solver run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Board size.
    pub queens: usize,
    /// Worker count, absent for sequential runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
    /// Total number of solutions.
    pub solutions: u64,
    /// Wall-clock time spent in the solver.
    pub elapsed: Duration,
    /// One solution for display, if the solver captured one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<SolutionSnapshot>,
}

impl Report {
    /// Runs `solver` on a `queens`×`queens` board and times it.
    pub fn measure<S: Solver>(solver: &S, queens: usize, threads: Option<usize>) -> Result<Self> {
        let start = Instant::now();
        let outcome = solver.solve(queens)?;
        let elapsed = start.elapsed();

        Ok(Report {
            queens,
            threads,
            solutions: outcome.solutions,
            elapsed,
            snapshot: outcome.snapshot,
        })
    }

    /// Writes the human-readable report.
    pub fn write_text<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "Elapsed time: {}", format_elapsed(self.elapsed))?;
        write!(
            out,
            "There are {} solutions for {} queens.",
            self.solutions, self.queens
        )?;
        match &self.snapshot {
            Some(snapshot) => write!(out, " Here's one of them:\n\n{snapshot}")?,
            None => writeln!(out)?,
        }
        out.flush()?;
        Ok(())
    }

    /// Writes the report as a single JSON object followed by a newline.
    pub fn write_json<W: Write>(&self, mut out: W) -> Result<()> {
        serde_json::to_writer(&mut out, self)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

/// Formats a duration as `seconds.microseconds`.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{}.{:06}", elapsed.as_secs(), elapsed.subsec_micros())
}
