//! Configuration module
//!
//! TOML file settings; command-line flags take precedence over every value
//! read here.

use crate::error::CliError;
use anyhow::{Context, Result};
use emotrie_core::{Dialect, Vintage};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Pattern generation configuration
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Generation-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Table vintage: "auto", "v11" or "v12"
    pub vintage: String,

    /// Regex dialect: "rust" or "javascript"
    pub dialect: String,

    /// Write non-ASCII code points as escapes
    pub escape_unicode: bool,

    /// Prefix for every output key
    pub key_prefix: String,

    /// Categories to emit (empty = all)
    pub categories: Vec<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            vintage: "auto".to_string(),
            dialect: "rust".to_string(),
            escape_unicode: false,
            key_prefix: String::new(),
            categories: Vec::new(),
        }
    }
}

impl GenerationConfig {
    /// Parsed vintage, None for "auto"
    pub fn vintage(&self) -> Result<Option<Vintage>> {
        parse_vintage(&self.vintage)
    }

    /// Parsed dialect
    pub fn dialect(&self) -> Result<Dialect> {
        self.dialect
            .parse()
            .map_err(|e: String| CliError::ConfigError(e).into())
    }
}

/// Parse a vintage name, accepting "auto"
pub fn parse_vintage(name: &str) -> Result<Option<Vintage>> {
    if name.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    name.parse()
        .map(Some)
        .map_err(|e: String| CliError::ConfigError(e).into())
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format: "json", "toml" or "text"
    pub format: String,

    /// Pretty print JSON output
    pub pretty: bool,

    /// Include table summary and timings
    pub include_metadata: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            pretty: true,
            include_metadata: false,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Minimum table entries before categories compile in parallel
    pub parallel_threshold: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 1_000,
            worker_threads: 0,
        }
    }
}
