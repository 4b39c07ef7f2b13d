//! Execution strategies for compiling categories

use crate::error::Result;
use emotrie_core::{Category, LiteralTable, Renderer, StatusTag};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One category after another on the calling thread
    Sequential,
    /// One trie per worker thread
    Parallel,
    /// Choose based on table size and category count
    Adaptive,
}

/// Pattern compiled for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledCategory {
    /// Category name, without any output prefix
    pub name: &'static str,
    /// Literals selected by the category
    pub literals: usize,
    /// `(?:...)`-wrapped pattern
    pub pattern: String,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Compile every category against the shared read-only table.
    ///
    /// Results come back in the order of `categories`.
    fn compile<S: StatusTag>(
        &self,
        table: &LiteralTable<S>,
        categories: &[&'static Category<S>],
        renderer: &Renderer,
    ) -> Result<Vec<CompiledCategory>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Compile one category; the building block every executor shares
pub(crate) fn compile_one<S: StatusTag>(
    table: &LiteralTable<S>,
    category: &'static Category<S>,
    renderer: &Renderer,
) -> Result<CompiledCategory> {
    let subset = table.filter(|status| category.matches(status));
    let pattern = renderer.compile(&subset)?;

    log::debug!(
        "category {}: {} literals -> {} byte pattern",
        category.name(),
        subset.len(),
        pattern.len()
    );

    Ok(CompiledCategory {
        name: category.name(),
        literals: subset.len(),
        pattern,
    })
}

/// Pick sequential or parallel execution for a table
pub fn auto_select(entries: usize, categories: usize, threshold: usize) -> ExecutionMode {
    // One category has nothing to overlap; small tables do not pay for the pool
    if cfg!(feature = "parallel") && categories > 1 && entries >= threshold {
        ExecutionMode::Parallel
    } else {
        ExecutionMode::Sequential
    }
}
