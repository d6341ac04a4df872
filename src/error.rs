use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

/// Error type for queens operations.
#[derive(Error, Debug)]
pub enum QueensError {
    /// Too many positional arguments were given on the command line.
    #[error("wrong number of parameters: expected at most {max}, got {got}")]
    InvalidArgumentCount {
        /// Maximum number of positional arguments accepted.
        max: usize,
        /// Number of positional arguments received.
        got: usize,
    },

    /// Board size or worker count outside the accepted domain.
    #[error("invalid parameter: {0}")]
    InvalidParameterValue(String),

    /// Allocation of a board or search context failed.
    #[error("can't allocate memory: {0}")]
    ResourceExhaustion(#[from] TryReserveError),

    /// A fork-join task panicked before filling its result slot.
    #[error("worker {0} panicked")]
    WorkerPanicked(usize),

    /// A thread pool backend could not be started.
    #[error("thread pool error: {0}")]
    Pool(String),

    /// IO error while writing a report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error while writing a report.
    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for queens operations.
pub type Result<T> = std::result::Result<T, QueensError>;
