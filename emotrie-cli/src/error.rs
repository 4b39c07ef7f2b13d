//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file or flag value is invalid
    ConfigError(String),
    /// A generated pattern failed to compile with the regex crate
    InvalidPattern {
        /// Output key of the pattern
        key: String,
        /// Compiler message
        reason: String,
    },
    /// Generated patterns disagree with the table
    CheckFailed {
        /// Members a pattern rejected plus non-members it accepted
        mismatches: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidPattern { key, reason } => {
                write!(f, "Pattern {key} does not compile: {reason}")
            }
            CliError::CheckFailed { mismatches } => {
                write!(f, "Check failed: {mismatches} mismatched literals")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
