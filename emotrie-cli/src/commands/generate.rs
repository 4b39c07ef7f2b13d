//! Generate command implementation

use crate::{
    config::{parse_vintage, CliConfig},
    error::CliError,
    output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter, TomlFormatter},
    progress::ProgressReporter,
};
use anyhow::{Context, Result};
use clap::Args;
use emotrie_core::{Dialect, UnicodeStyle};
use emotrie_engine::{ExecutionMode, Input, PatternGenerator, PatternGeneratorBuilder};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// emoji-test.txt table ("-" reads stdin)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: json]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Table vintage [default: auto]
    #[arg(long, value_name = "VINTAGE", value_parser = ["auto", "v11", "v12"])]
    pub vintage: Option<String>,

    /// Target regex dialect [default: rust]
    #[arg(short, long, value_name = "DIALECT", value_parser = ["rust", "javascript"])]
    pub dialect: Option<String>,

    /// Write non-ASCII code points as escape sequences
    #[arg(long)]
    pub escape_unicode: bool,

    /// Prefix for every output key (e.g. Emoji_Test_)
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Only emit this category (repeatable)
    #[arg(long, value_name = "NAME")]
    pub category: Vec<String>,

    /// Include table summary and timings in the output
    #[arg(long)]
    pub metadata: bool,

    /// Compile categories in parallel even for small tables
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel compilation
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting pattern generation");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let generator = self.build_generator(&config)?;
        let format = self.resolve_format(&config)?;
        let include_metadata = self.metadata || config.output.include_metadata;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.start(&format!("Compiling patterns from {}", self.input));
        let output = generator
            .generate(open_input(&self.input))
            .with_context(|| format!("Failed to generate patterns from {}", self.input))?;
        progress.finish();

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Json => Box::new(JsonFormatter::new(
                writer,
                config.output.pretty,
                include_metadata,
            )),
            OutputFormat::Toml => Box::new(TomlFormatter::new(writer, include_metadata)),
            OutputFormat::Text => Box::new(TextFormatter::new(writer, include_metadata)),
        };
        formatter.write_output(&output)?;

        if let Some(path) = &self.output {
            log::info!(
                "Wrote {} patterns to {}",
                output.patterns.len(),
                path.display()
            );
        }

        Ok(())
    }

    /// Merge flags over the configuration file into a generator
    pub fn build_generator(&self, config: &CliConfig) -> Result<PatternGenerator> {
        let generation = &config.generation;

        let vintage = match &self.vintage {
            Some(name) => parse_vintage(name)?,
            None => generation.vintage()?,
        };
        let dialect = match &self.dialect {
            Some(name) => name
                .parse::<Dialect>()
                .map_err(CliError::ConfigError)?,
            None => generation.dialect()?,
        };
        let unicode = if self.escape_unicode || generation.escape_unicode {
            UnicodeStyle::Escaped
        } else {
            UnicodeStyle::Literal
        };
        let prefix = self
            .prefix
            .clone()
            .unwrap_or_else(|| generation.key_prefix.clone());
        let categories = if self.category.is_empty() {
            generation.categories.clone()
        } else {
            self.category.clone()
        };

        let configured_threads = match config.performance.worker_threads {
            0 => None,
            n => Some(n),
        };
        let threads = self.threads.or(configured_threads);
        let (mode, threads) = if self.parallel {
            let threads = threads.unwrap_or_else(num_cpus::get);
            log::info!("Parallel compilation on {threads} threads");
            (ExecutionMode::Parallel, Some(threads))
        } else {
            (ExecutionMode::Adaptive, threads)
        };

        let mut builder = PatternGeneratorBuilder::new()
            .vintage(vintage)
            .dialect(dialect)
            .unicode(unicode)
            .key_prefix(prefix)
            .execution_mode(mode)
            .threads(threads)
            .parallel_threshold(config.performance.parallel_threshold);
        if !categories.is_empty() {
            builder = builder.categories(categories);
        }

        builder.build().context("Invalid generation settings")
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_name(&config.output.format).ok_or_else(|| {
                CliError::ConfigError(format!(
                    "unknown output format: {}",
                    config.output.format
                ))
                .into()
            }),
        }
    }
}

/// Table input for a path argument, "-" meaning stdin
pub(crate) fn open_input(path: &str) -> Input {
    if path == "-" {
        Input::from_reader(io::stdin())
    } else {
        Input::from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emotrie_engine::Vintage;

    fn args() -> GenerateArgs {
        GenerateArgs {
            input: "emoji-test.txt".to_string(),
            output: None,
            format: None,
            vintage: None,
            dialect: None,
            escape_unicode: false,
            prefix: None,
            category: Vec::new(),
            metadata: false,
            parallel: false,
            threads: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let generator = args().build_generator(&CliConfig::default()).unwrap();
        let config = generator.config();
        assert_eq!(config.vintage, None);
        assert_eq!(config.dialect, Dialect::Rust);
        assert_eq!(config.unicode, UnicodeStyle::Literal);
        assert!(config.categories.is_none());
        assert_eq!(config.execution_mode, ExecutionMode::Adaptive);
    }

    #[test]
    fn test_flags_override_config() {
        let mut file_config = CliConfig::default();
        file_config.generation.dialect = "javascript".to_string();
        file_config.generation.key_prefix = "Emoji_Test_".to_string();
        file_config.generation.categories = vec!["All".to_string()];
        file_config.output.format = "text".to_string();

        let mut args = args();
        args.dialect = Some("rust".to_string());
        args.vintage = Some("v11".to_string());
        args.category = vec!["Keyboard".to_string()];

        let generator = args.build_generator(&file_config).unwrap();
        let config = generator.config();
        assert_eq!(config.dialect, Dialect::Rust);
        assert_eq!(config.vintage, Some(Vintage::V11));
        assert_eq!(config.key_prefix, "Emoji_Test_");
        assert_eq!(config.categories, Some(vec!["Keyboard".to_string()]));
        assert_eq!(args.resolve_format(&file_config).unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_parallel_flag_picks_thread_count() {
        let mut args = args();
        args.parallel = true;

        let generator = args.build_generator(&CliConfig::default()).unwrap();
        assert_eq!(generator.config().execution_mode, ExecutionMode::Parallel);
        assert!(generator.config().threads.unwrap() >= 1);
    }

    #[test]
    fn test_invalid_config_values() {
        let mut config = CliConfig::default();
        config.output.format = "yaml".to_string();
        assert!(args().resolve_format(&config).is_err());

        let mut config = CliConfig::default();
        config.generation.vintage = "v10".to_string();
        assert!(args().build_generator(&config).is_err());
    }

    #[test]
    fn test_unknown_category_for_fixed_vintage() {
        let mut args = args();
        args.vintage = Some("v11".to_string());
        args.category = vec!["Display".to_string()];

        let err = args.build_generator(&CliConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("Display"));
    }
}
