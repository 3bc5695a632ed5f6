//! Error types for chain operations.

use thiserror::Error;

/// Main error type for chain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("Cannot delete from an empty chain")]
    EmptyChain,

    #[error("Position must be 1 or greater (got {0})")]
    InvalidPosition(i64),

    #[error("Position {position} is out of range (chain length is {len})")]
    PositionOutOfRange { position: i64, len: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ChainError {
    fn from(e: serde_json::Error) -> Self {
        ChainError::Config(e.to_string())
    }
}

/// Result type for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;
