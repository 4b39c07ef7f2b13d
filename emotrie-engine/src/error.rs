//! Layered error types
//!
//! Core failures are wrapped unchanged; everything the loader and the
//! orchestration layer can add sits next to them.

use emotrie_core::{CoreError, Vintage};
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Trie build or render failure
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// Malformed data-table line
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number in the table
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Requested category does not exist for the table vintage
    #[error("category '{name}' is not defined for table vintage {vintage}")]
    UnknownCategory {
        /// The requested name
        name: String,
        /// Vintage the table was read as
        vintage: Vintage,
    },

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EngineError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EngineError::EncodingError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
