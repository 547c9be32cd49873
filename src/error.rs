use std::path::PathBuf;

use thiserror::Error;

/// Returned by [`RoundRobin::read`](crate::RoundRobin::read) when the pool
/// holds no resources yet.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("pool is empty, nothing has been written to it yet")]
pub struct EmptyPoolError;

/// Failures while loading or validating construction-time configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("pool capacity must be a positive integer, got 0")]
    ZeroCapacity,
}
