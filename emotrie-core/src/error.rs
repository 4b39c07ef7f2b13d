//! Core error types (deterministic only)

use crate::render::Dialect;
use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A literal handed to the trie builder was unusable (e.g. zero-length)
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the literal was rejected
        reason: String,
    },

    /// A code point has no literal or escape form in the target dialect
    #[error("code point U+{code_point:04X} cannot be represented in the {dialect} dialect")]
    UnsupportedCodePoint {
        /// The offending value
        code_point: u32,
        /// Dialect that was being rendered
        dialect: Dialect,
    },
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
