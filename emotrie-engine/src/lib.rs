//! Table loading and orchestration for emoji pattern generation
//!
//! This crate reads `emoji-test.txt` tables, selects the status scheme of
//! the table vintage, and drives the core compressor once per category,
//! sequentially or on a rayon pool.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod generator;
pub mod input;
pub mod table;

// Re-export key types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use generator::{CategoryStats, GenerationMetadata, Output, PatternGenerator, PatternGeneratorBuilder};
pub use input::Input;
pub use table::{RawEntry, RawTable, TableMetadata, TableSummary};

// Re-export from core for convenience
pub use emotrie_core::{Dialect, PatternSet, UnicodeStyle, Vintage};
