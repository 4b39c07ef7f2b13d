//! TOML output formatter

use super::{summary_lines, OutputFormatter};
use anyhow::{Context, Result};
use emotrie_engine::Output;
use std::io::Write;

/// TOML formatter - one `key = "pattern"` line per category
pub struct TomlFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
}

impl<W: Write> TomlFormatter<W> {
    /// Create a new TOML formatter
    pub fn new(writer: W, include_metadata: bool) -> Self {
        Self {
            writer,
            include_metadata,
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TomlFormatter<W> {
    fn write_output(&mut self, output: &Output) -> Result<()> {
        if self.include_metadata {
            for line in summary_lines(output) {
                writeln!(self.writer, "# {line}")?;
            }
            writeln!(self.writer)?;
        }

        let body = ::toml::to_string(&output.patterns)
            .context("Failed to serialize patterns as TOML")?;
        self.writer.write_all(body.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
