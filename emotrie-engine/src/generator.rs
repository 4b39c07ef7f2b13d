//! Pattern generator and builder
//!
//! Entry point of the engine: load a table, pick the vintage, compile every
//! requested category and hand back the name → pattern mapping.

use crate::{
    config::EngineConfig,
    error::{EngineError, Result},
    executor::{auto_select, CompiledCategory, ExecutionMode, Executor, SequentialExecutor},
    input::Input,
    table::{RawTable, TableSummary},
};
use emotrie_core::{
    BooleanScheme, Category, Dialect, LiteralSet, PatternSet, QualifiedScheme, StatusScheme,
    UnicodeStyle, Vintage,
};
use serde::Serialize;
use std::time::Instant;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Generates one pattern per category from an `emoji-test.txt` table
#[derive(Debug, Clone, Default)]
pub struct PatternGenerator {
    config: EngineConfig,
}

/// Patterns together with what was learned about the table
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// Output key → `(?:...)` pattern, in category order
    pub patterns: PatternSet,
    /// Table counts
    pub summary: TableSummary,
    /// Generation metadata
    pub metadata: GenerationMetadata,
}

/// Generation metadata
#[derive(Debug, Clone, Serialize)]
pub struct GenerationMetadata {
    /// Execution mode that was actually used
    #[serde(serialize_with = "serialize_mode")]
    pub execution_mode: ExecutionMode,
    /// Wall time in milliseconds
    pub generation_time_ms: f64,
    /// Per-category sizes, in category order
    pub categories: Vec<CategoryStats>,
}

/// Size of one compiled category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    /// Output key (prefix included)
    pub key: String,
    /// Literals the category selected
    pub literals: usize,
    /// Pattern length in bytes
    pub pattern_bytes: usize,
}

fn serialize_mode<S: serde::Serializer>(
    mode: &ExecutionMode,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(match mode {
        ExecutionMode::Sequential => "sequential",
        ExecutionMode::Parallel => "parallel",
        ExecutionMode::Adaptive => "adaptive",
    })
}

impl PatternGenerator {
    /// Create a generator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        validate(&config)?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generate patterns from any input source
    pub fn generate(&self, input: Input) -> Result<Output> {
        let text = input.to_text()?;
        self.generate_text(&text)
    }

    /// Generate patterns from table text
    pub fn generate_text(&self, text: &str) -> Result<Output> {
        let raw = RawTable::parse(text)?;
        let vintage = self.resolve_vintage(&raw);
        match vintage {
            Vintage::V11 => self.run::<BooleanScheme>(&raw, vintage),
            Vintage::V12 => self.run::<QualifiedScheme>(&raw, vintage),
        }
    }

    /// Literal set each selected category would compile, keyed like the output.
    ///
    /// Lets callers check generated patterns against the table they came from.
    pub fn members(&self, text: &str) -> Result<Vec<(String, LiteralSet)>> {
        let raw = RawTable::parse(text)?;
        match self.resolve_vintage(&raw) {
            Vintage::V11 => self.members_of::<BooleanScheme>(&raw, Vintage::V11),
            Vintage::V12 => self.members_of::<QualifiedScheme>(&raw, Vintage::V12),
        }
    }

    fn resolve_vintage(&self, raw: &RawTable) -> Vintage {
        match self.config.vintage {
            Some(vintage) => vintage,
            None => {
                let detected = raw.detect_vintage();
                log::debug!("detected table vintage {detected}");
                detected
            }
        }
    }

    fn run<Sch: StatusScheme>(&self, raw: &RawTable, vintage: Vintage) -> Result<Output> {
        let start = Instant::now();

        let table = raw.to_table::<Sch::Status>()?;
        let summary = raw.summary(vintage, &table);
        log::info!(
            "loaded {} literals from {} data lines as {} table",
            summary.literals,
            summary.data_lines,
            vintage
        );

        let categories = self.select_categories::<Sch>(vintage)?;
        let mode = match self.config.execution_mode {
            ExecutionMode::Adaptive => auto_select(
                table.len(),
                categories.len(),
                self.config.parallel_threshold,
            ),
            mode => mode,
        };

        let renderer = self.config.renderer();
        let (compiled, used) = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => {
                let executor = ParallelExecutor::new(self.config.threads);
                (executor.compile(&table, &categories, &renderer)?, executor.mode())
            }
            _ => (
                SequentialExecutor.compile(&table, &categories, &renderer)?,
                SequentialExecutor.mode(),
            ),
        };

        let mut patterns = PatternSet::new();
        let mut stats = Vec::with_capacity(compiled.len());
        for CompiledCategory {
            name,
            literals,
            pattern,
        } in compiled
        {
            let key = self.key_for(name);
            stats.push(CategoryStats {
                key: key.clone(),
                literals,
                pattern_bytes: pattern.len(),
            });
            patterns.insert(key, pattern);
        }

        let elapsed = start.elapsed();
        log::info!(
            "compiled {} categories in {:.2?} ({:?})",
            patterns.len(),
            elapsed,
            used
        );

        Ok(Output {
            patterns,
            summary,
            metadata: GenerationMetadata {
                execution_mode: used,
                generation_time_ms: elapsed.as_secs_f64() * 1000.0,
                categories: stats,
            },
        })
    }

    fn members_of<Sch: StatusScheme>(
        &self,
        raw: &RawTable,
        vintage: Vintage,
    ) -> Result<Vec<(String, LiteralSet)>> {
        let table = raw.to_table::<Sch::Status>()?;
        let categories = self.select_categories::<Sch>(vintage)?;
        Ok(categories
            .into_iter()
            .map(|category| {
                let set = table.filter(|status| category.matches(status));
                (self.key_for(category.name()), set)
            })
            .collect())
    }

    /// Requested categories in scheme order, or every category
    fn select_categories<Sch: StatusScheme>(
        &self,
        vintage: Vintage,
    ) -> Result<Vec<&'static Category<Sch::Status>>> {
        let Some(requested) = &self.config.categories else {
            return Ok(Sch::categories().iter().collect());
        };

        for name in requested {
            if Sch::category(name).is_none() {
                return Err(EngineError::UnknownCategory {
                    name: name.clone(),
                    vintage,
                });
            }
        }
        Ok(Sch::categories()
            .iter()
            .filter(|category| requested.iter().any(|name| name == category.name()))
            .collect())
    }

    fn key_for(&self, name: &str) -> String {
        format!("{}{}", self.config.key_prefix, name)
    }
}

fn validate(config: &EngineConfig) -> Result<()> {
    if config.threads == Some(0) {
        return Err(EngineError::ConfigError(
            "thread count must be at least 1".to_string(),
        ));
    }

    if let Some(categories) = &config.categories {
        if categories.is_empty() {
            return Err(EngineError::ConfigError(
                "category list cannot be empty".to_string(),
            ));
        }
        // Names can only be checked up front when the vintage is fixed
        if let Some(vintage) = config.vintage {
            let known = vintage.category_names();
            if let Some(unknown) = categories.iter().find(|n| !known.contains(&n.as_str())) {
                return Err(EngineError::UnknownCategory {
                    name: unknown.clone(),
                    vintage,
                });
            }
        }
    }

    Ok(())
}

/// Builder for PatternGenerator
///
/// Provides a fluent interface over [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct PatternGeneratorBuilder {
    config: EngineConfig,
}

impl PatternGeneratorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the table vintage instead of detecting it
    pub fn vintage(mut self, vintage: Option<Vintage>) -> Self {
        self.config.vintage = vintage;
        self
    }

    /// Set the target regex syntax
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.config.dialect = dialect;
        self
    }

    /// Set how non-ASCII code points are written
    pub fn unicode(mut self, unicode: UnicodeStyle) -> Self {
        self.config.unicode = unicode;
        self
    }

    /// Set the output key prefix
    pub fn key_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.config.key_prefix = prefix.into();
        self
    }

    /// Restrict output to the named categories
    pub fn categories<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.categories = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the adaptive threshold (table entries)
    pub fn parallel_threshold(mut self, entries: usize) -> Self {
        self.config.parallel_threshold = entries;
        self
    }

    /// Build the generator
    pub fn build(self) -> Result<PatternGenerator> {
        PatternGenerator::with_config(self.config)
    }
}
