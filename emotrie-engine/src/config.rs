//! Configuration types for the engine

use crate::executor::ExecutionMode;
use emotrie_core::{Dialect, Renderer, UnicodeStyle, Vintage};

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Table vintage (None = detect from the status tags)
    pub vintage: Option<Vintage>,
    /// Target regex syntax
    pub dialect: Dialect,
    /// How non-ASCII code points are written
    pub unicode: UnicodeStyle,
    /// Prepended to every category name in the output
    pub key_prefix: String,
    /// Categories to compile (None = every category of the vintage)
    pub categories: Option<Vec<String>>,
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum table size for parallel compilation in adaptive mode
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            vintage: None,
            dialect: Dialect::Rust,
            unicode: UnicodeStyle::Literal,
            key_prefix: String::new(),
            categories: None,
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 1_000,
        }
    }
}

impl EngineConfig {
    /// ECMAScript `u`-mode output keyed `Emoji_Test_*`, the shape the
    /// JavaScript consumers of these patterns expect
    pub fn javascript() -> Self {
        Self {
            dialect: Dialect::JavaScript,
            key_prefix: "Emoji_Test_".to_string(),
            ..Self::default()
        }
    }

    /// ASCII-only output with every non-ASCII code point escaped
    pub fn escaped() -> Self {
        Self {
            unicode: UnicodeStyle::Escaped,
            ..Self::default()
        }
    }

    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            ..Self::default()
        }
    }

    /// Renderer for this configuration
    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.dialect, self.unicode)
    }
}
