//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use emotrie_engine::Output;
use std::io::Write;

/// JSON formatter - outputs the category → pattern object
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    include_metadata: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool, include_metadata: bool) -> Self {
        Self {
            writer,
            pretty,
            include_metadata,
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_value<T: serde::Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn write_output(&mut self, output: &Output) -> Result<()> {
        if self.include_metadata {
            self.write_value(output)?;
        } else {
            self.write_value(&output.patterns)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
