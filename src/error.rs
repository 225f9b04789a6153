//! Error types for vanity-pool.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid basePublicKey")]
    InvalidBaseKey,

    #[error("Invalid prefix")]
    InvalidPrefix,

    #[error("Too many bits in prefix: {bits} exceeds maximum {max}")]
    BudgetExceeded { bits: u32, max: u32 },

    /// Miner ran but produced no usable key. The detail is operator-facing;
    /// callers only ever see a generic message.
    #[error("miner produced no usable key: {0}")]
    ComputationFailed(String),

    #[error("failed to launch miner: {0}")]
    LaunchFailed(#[source] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
