//! Output formatting module

use anyhow::Result;
use emotrie_engine::Output;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Write the generated patterns (and metadata, if enabled)
    fn write_output(&mut self, output: &Output) -> Result<()>;
}

pub mod json;
pub mod text;
pub mod toml;

pub use json::JsonFormatter;
pub use text::TextFormatter;
pub use toml::TomlFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON object mapping category to pattern
    Json,
    /// TOML table of category = pattern
    Toml,
    /// One tab-separated category/pattern pair per line
    Text,
}

impl OutputFormat {
    /// All formats
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Toml, OutputFormat::Text];

    /// Format name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Toml => "toml",
            OutputFormat::Text => "text",
        }
    }

    /// Parse a format name from a config file
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name))
    }
}

/// Summary lines shared by the comment-capable formats
pub(crate) fn summary_lines(output: &Output) -> Vec<String> {
    let summary = &output.summary;
    let mut lines = vec![format!(
        "vintage: {} (version {})",
        summary.vintage,
        summary.version.as_deref().unwrap_or("unknown")
    )];
    lines.push(format!(
        "literals: {} from {} data lines ({} overwritten)",
        summary.literals, summary.data_lines, summary.overwrites
    ));
    for (status, count) in &summary.statuses {
        lines.push(format!("  {status}: {count}"));
    }
    for stats in &output.metadata.categories {
        lines.push(format!(
            "{}: {} literals, {} bytes",
            stats.key, stats.literals, stats.pattern_bytes
        ));
    }
    lines.push(format!(
        "generated in {:.2} ms",
        output.metadata.generation_time_ms
    ));
    lines
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("toml"), Some(OutputFormat::Toml));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }

    #[test]
    fn test_summary_lines() {
        let output = test_support::keycap_output();
        let lines = summary_lines(&output);
        assert_eq!(lines[0], "vintage: v12 (version 12.0)");
        assert!(lines.contains(&"  unqualified: 1".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("Keyboard: 1 literals")));
    }
}
