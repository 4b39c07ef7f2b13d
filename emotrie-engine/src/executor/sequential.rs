//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{compile_one, CompiledCategory, ExecutionMode, Executor},
};
use emotrie_core::{Category, LiteralTable, Renderer, StatusTag};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn compile<S: StatusTag>(
        &self,
        table: &LiteralTable<S>,
        categories: &[&'static Category<S>],
        renderer: &Renderer,
    ) -> Result<Vec<CompiledCategory>> {
        categories
            .iter()
            .map(|&category| compile_one(table, category, renderer))
            .collect()
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
