//! emotrie command-line entry point

use anyhow::Result;
use clap::Parser;
use emotrie_cli::commands::Commands;

/// Generate compact emoji regular expressions from emoji-test.txt
#[derive(Debug, Parser)]
#[command(name = "emotrie", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
