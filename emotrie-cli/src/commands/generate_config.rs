//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Start from the JavaScript preset (u-mode patterns keyed Emoji_Test_*)
    #[arg(long)]
    pub javascript: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it for generation:");
        println!(
            "   emotrie generate -i emoji-test.txt -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let (dialect, prefix) = if self.javascript {
            ("javascript", "Emoji_Test_")
        } else {
            ("rust", "")
        };

        format!(
            r#"# emotrie configuration
# Command-line flags override every value in this file.

[generation]
# Table vintage: "auto" (detect from status tags), "v11" or "v12"
vintage = "auto"

# Target regex syntax: "rust" (regex crate) or "javascript" (ECMAScript u-mode)
dialect = "{dialect}"

# Write non-ASCII code points as escapes instead of the characters themselves
escape_unicode = false

# Prepended to every category name in the output
key_prefix = "{prefix}"

# Categories to emit; empty means every category of the table vintage
#   v11: All, Keyboard
#   v12: All, Component, Keyboard, Display
categories = []

[output]
# "json", "toml" or "text"
format = "json"

# Pretty print JSON output
pretty = true

# Include table summary and timings
include_metadata = false

[performance]
# Minimum table entries before categories compile in parallel
parallel_threshold = 1000

# Number of worker threads (0 = auto)
worker_threads = 0
"#
        )
    }
}
