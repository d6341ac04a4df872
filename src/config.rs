use log::info;

use crate::{QueensError, Result};

/// Board size used when none (or an invalid one) is given.
pub const DEFAULT_QUEENS: usize = 8;
/// Worker count used when none (or an invalid one) is given.
pub const DEFAULT_THREADS: usize = 8;

/// Board size and worker count of one run, after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Board size, at least 1.
    pub queens: usize,
    /// Number of workers, between 1 and `queens`. Always 1 for sequential runs.
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            queens: DEFAULT_QUEENS,
            threads: DEFAULT_THREADS,
        }
    }
}

/// A resolved config and the warning raised while resolving it, if any.
///
/// A warning means the given values were rejected and the defaults are in
/// use; the run still proceeds.
pub type Resolved = (Config, Option<QueensError>);

impl Config {
    /// Resolves the `[N]` positional arguments of a sequential run.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgumentCount` for more than one argument.
    pub fn sequential<S: AsRef<str>>(args: &[S]) -> Result<Resolved> {
        let defaults = Config {
            queens: DEFAULT_QUEENS,
            threads: 1,
        };
        match args {
            [] => Ok((defaults, None)),
            [queens] => match parse_positive(queens.as_ref()) {
                Some(queens) => Ok((Config { queens, threads: 1 }, None)),
                None => Ok((
                    defaults,
                    Some(QueensError::InvalidParameterValue(format!(
                        "wrong number of queens '{}'",
                        queens.as_ref()
                    ))),
                )),
            },
            _ => Err(QueensError::InvalidArgumentCount {
                max: 1,
                got: args.len(),
            }),
        }
    }

    /// Resolves the `[N] [threadCount]` positional arguments of a parallel run.
    ///
    /// Any invalid value resets both fields to their defaults. When only
    /// `N` is given and it is smaller than the default worker count, the
    /// worker count is lowered to `N`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgumentCount` for more than two arguments.
    pub fn parallel<S: AsRef<str>>(args: &[S]) -> Result<Resolved> {
        match args {
            [] => Ok((Config::default(), None)),
            [queens] => match parse_positive(queens.as_ref()) {
                Some(queens) => {
                    let threads = DEFAULT_THREADS.min(queens);
                    if threads < DEFAULT_THREADS {
                        info!("Using {threads} threads for {queens} queens");
                    }
                    Ok((Config { queens, threads }, None))
                }
                None => Ok((
                    Config::default(),
                    Some(QueensError::InvalidParameterValue(format!(
                        "wrong number of queens '{}'",
                        queens.as_ref()
                    ))),
                )),
            },
            [queens, threads] => {
                match (
                    parse_positive(queens.as_ref()),
                    parse_positive(threads.as_ref()),
                ) {
                    (Some(queens), Some(threads)) if threads <= queens => {
                        Ok((Config { queens, threads }, None))
                    }
                    _ => Ok((
                        Config::default(),
                        Some(QueensError::InvalidParameterValue(format!(
                            "wrong number of queens '{}' or threads '{}'",
                            queens.as_ref(),
                            threads.as_ref()
                        ))),
                    )),
                }
            }
            _ => Err(QueensError::InvalidArgumentCount {
                max: 2,
                got: args.len(),
            }),
        }
    }
}

/// Parses a strictly positive integer; anything else is `None`.
fn parse_positive(arg: &str) -> Option<usize> {
    arg.trim().parse::<usize>().ok().filter(|&n| n >= 1)
}
