//! Parallel execution strategy
//!
//! Each category builds its own trie on a rayon worker; the only shared
//! state is the read-only literal table.

use crate::{
    error::{EngineError, Result},
    executor::{compile_one, CompiledCategory, ExecutionMode, Executor},
};
use emotrie_core::{Category, LiteralTable, Renderer, StatusTag};
use rayon::prelude::*;

/// Parallel multi-threaded executor
#[derive(Debug, Clone, Default)]
pub struct ParallelExecutor {
    threads: Option<usize>,
}

impl ParallelExecutor {
    /// Create a parallel executor (None = rayon's global pool)
    pub fn new(threads: Option<usize>) -> Self {
        Self { threads }
    }

    fn compile_all<S: StatusTag>(
        table: &LiteralTable<S>,
        categories: &[&'static Category<S>],
        renderer: &Renderer,
    ) -> Result<Vec<CompiledCategory>> {
        // indexed collect keeps the input order
        categories
            .par_iter()
            .map(|&category| compile_one(table, category, renderer))
            .collect()
    }
}

impl Executor for ParallelExecutor {
    fn compile<S: StatusTag>(
        &self,
        table: &LiteralTable<S>,
        categories: &[&'static Category<S>],
        renderer: &Renderer,
    ) -> Result<Vec<CompiledCategory>> {
        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EngineError::ParallelError(e.to_string()))?;
                pool.install(|| Self::compile_all(table, categories, renderer))
            }
            None => Self::compile_all(table, categories, renderer),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
