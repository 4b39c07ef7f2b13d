//! List command implementation

use super::ListCommands;
use crate::output::OutputFormat;
use anyhow::Result;
use emotrie_core::{Dialect, Vintage};

/// Print the requested listing to stdout
pub fn execute(subcommand: ListCommands) -> Result<()> {
    for line in lines(subcommand) {
        println!("{line}");
    }
    Ok(())
}

fn lines(subcommand: ListCommands) -> Vec<String> {
    match subcommand {
        ListCommands::Vintages => Vintage::ALL
            .iter()
            .map(|v| format!("{:<6}{}", v.name(), v.description()))
            .collect(),
        ListCommands::Categories => Vintage::ALL
            .iter()
            .map(|v| format!("{:<6}{}", v.name(), v.category_names().join(", ")))
            .collect(),
        ListCommands::Dialects => Dialect::ALL
            .iter()
            .map(|d| d.name().to_string())
            .collect(),
        ListCommands::Formats => OutputFormat::ALL
            .iter()
            .map(|f| f.name().to_string())
            .collect(),
    }
}
