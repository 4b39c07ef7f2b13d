//! Plain text output formatter

use super::{summary_lines, OutputFormatter};
use anyhow::Result;
use emotrie_engine::Output;
use std::io::Write;

/// Text formatter - `key<TAB>pattern` lines
pub struct TextFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
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

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn write_output(&mut self, output: &Output) -> Result<()> {
        if self.include_metadata {
            for line in summary_lines(output) {
                writeln!(self.writer, "# {line}")?;
            }
        }
        for (key, pattern) in output.patterns.iter() {
            writeln!(self.writer, "{key}\t{pattern}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::keycap_output;

    #[test]
    fn test_text_lines() {
        let mut formatter = TextFormatter::new(Vec::new(), false);
        formatter.write_output(&keycap_output()).unwrap();
        let text = String::from_utf8(formatter.into_inner()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "All\t(?:\\#\u{FE0F}?\u{20E3})");
        assert_eq!(lines[1], "Component\t(?:[^\\s\\S])");
    }
}
