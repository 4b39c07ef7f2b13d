//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod check;
pub mod generate;
pub mod generate_config;
pub mod list;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate category patterns from an emoji-test.txt table
    Generate(generate::GenerateArgs),

    /// Verify generated patterns against the table they came from
    Check(check::CheckArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List supported table vintages
    Vintages,

    /// List categories per vintage
    Categories,

    /// List supported regex dialects
    Dialects,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Generate(args) => args.execute(),
            Commands::Check(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // try_init: tests run several commands in one process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
