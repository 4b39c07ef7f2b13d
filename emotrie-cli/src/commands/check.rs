//! Check command implementation
//!
//! Regenerates the patterns in the `regex` crate's own dialect and matches
//! every literal of the table against every category, so a pattern that
//! misses a member or accepts a non-member is reported.

use super::generate::open_input;
use crate::{
    config::{parse_vintage, CliConfig},
    error::CliError,
};
use anyhow::{anyhow, Context, Result};
use clap::Args;
use emotrie_core::{Dialect, Literal, LiteralSet, UnicodeStyle};
use emotrie_engine::{PatternGenerator, PatternGeneratorBuilder};
use regex::{Regex, RegexBuilder};
use std::path::PathBuf;

/// Mismatched literals printed per category
const MAX_REPORTED: usize = 5;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// emoji-test.txt table ("-" reads stdin)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: String,

    /// Table vintage [default: auto]
    #[arg(long, value_name = "VINTAGE", value_parser = ["auto", "v11", "v12"])]
    pub vintage: Option<String>,

    /// Only check this category (repeatable)
    #[arg(long, value_name = "NAME")]
    pub category: Vec<String>,

    /// Check the escaped rendering instead of literal characters
    #[arg(long)]
    pub escape_unicode: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only report failures
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Outcome for one category
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CategoryCheck {
    /// Output key
    pub key: String,
    /// Literals the category should accept
    pub members: usize,
    /// Members the pattern did not match in full
    pub rejected: Vec<Literal>,
    /// Non-members the pattern matched in full
    pub accepted: Vec<Literal>,
}

impl CategoryCheck {
    /// Whether the pattern agrees with the table
    pub fn passed(&self) -> bool {
        self.rejected.is_empty() && self.accepted.is_empty()
    }

    /// Rejected plus wrongly accepted literals
    pub fn mismatches(&self) -> usize {
        self.rejected.len() + self.accepted.len()
    }
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        let config = CliConfig::load(self.config.as_deref())?;
        let generator = self.build_generator(&config)?;

        let text = open_input(&self.input)
            .to_text()
            .with_context(|| format!("Failed to read {}", self.input))?;
        let results = check_table(&generator, &text)?;

        let mut mismatches = 0;
        for result in &results {
            mismatches += result.mismatches();
            if result.passed() {
                if !self.quiet {
                    println!("✓ {}: {} literals", result.key, result.members);
                }
                continue;
            }

            println!(
                "✗ {}: {} of {} members rejected, {} non-members accepted",
                result.key,
                result.rejected.len(),
                result.members,
                result.accepted.len()
            );
            for literal in result.rejected.iter().take(MAX_REPORTED) {
                println!("    rejected {literal}");
            }
            for literal in result.accepted.iter().take(MAX_REPORTED) {
                println!("    accepted {literal}");
            }
        }

        if mismatches > 0 {
            return Err(CliError::CheckFailed { mismatches }.into());
        }
        if !self.quiet {
            println!("All {} categories match the table", results.len());
        }
        Ok(())
    }

    fn build_generator(&self, config: &CliConfig) -> Result<PatternGenerator> {
        let vintage = match &self.vintage {
            Some(name) => parse_vintage(name)?,
            None => config.generation.vintage()?,
        };
        let categories = if self.category.is_empty() {
            config.generation.categories.clone()
        } else {
            self.category.clone()
        };
        let unicode = if self.escape_unicode || config.generation.escape_unicode {
            UnicodeStyle::Escaped
        } else {
            UnicodeStyle::Literal
        };

        let mut builder = PatternGeneratorBuilder::new()
            .vintage(vintage)
            .dialect(Dialect::Rust)
            .unicode(unicode);
        if !categories.is_empty() {
            builder = builder.categories(categories);
        }
        builder.build().context("Invalid check settings")
    }
}

/// Match every table literal against every generated category pattern
pub fn check_table(generator: &PatternGenerator, text: &str) -> Result<Vec<CategoryCheck>> {
    let output = generator.generate_text(text)?;
    let members = generator.members(text)?;
    let universe: LiteralSet = members
        .iter()
        .flat_map(|(_, set)| set.iter().cloned())
        .collect();

    members
        .iter()
        .map(|(key, set)| -> Result<CategoryCheck> {
            let pattern = output
                .patterns
                .get(key)
                .ok_or_else(|| anyhow!("no pattern generated for {key}"))?;
            let re = anchored(key, pattern)?;

            let rejected = set
                .iter()
                .filter(|literal| !full_match(&re, literal))
                .cloned()
                .collect();
            let accepted = universe
                .iter()
                .filter(|literal| !set.contains(literal) && full_match(&re, literal))
                .cloned()
                .collect();

            log::debug!("checked {key} against {} literals", universe.len());
            Ok(CategoryCheck {
                key: key.clone(),
                members: set.len(),
                rejected,
                accepted,
            })
        })
        .collect()
}

fn anchored(key: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(&format!("^{pattern}$"))
        .size_limit(64 << 20)
        .build()
        .map_err(|e| {
            CliError::InvalidPattern {
                key: key.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
}

fn full_match(re: &Regex, literal: &Literal) -> bool {
    literal.to_text().is_some_and(|text| re.is_match(&text))
}
