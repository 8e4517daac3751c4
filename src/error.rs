use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejected configuration, reported before the session starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid number provided: {0:?}")]
    InvalidNumber(String),
    #[error("Speed cannot be below 1 (got {0})")]
    SpeedBelowOne(i64),
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to make room for another body segment.
#[derive(Debug, Error)]
pub enum GrowError {
    #[error("ran out of memory growing the snake to {requested} segments")]
    OutOfMemory {
        requested: usize,
        #[source]
        source: Option<TryReserveError>,
    },
}
