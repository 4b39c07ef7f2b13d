//! Loader for the line-oriented `emoji-test.txt` table
//!
//! Data lines look like
//!
//! ```text
//! 0023 FE0F 20E3  ; fully-qualified  # #️⃣ E0.6 keycap: #
//! ```
//!
//! Blank lines and lines starting with `#` are skipped; everything after the
//! first `#` of a data line is commentary.

use crate::error::{EngineError, Result};
use emotrie_core::{Literal, LiteralTable, StatusTag, Vintage};
use serde::Serialize;
use std::collections::BTreeMap;

/// One data line, status tag not yet interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// 1-based line number
    pub line: usize,
    /// Decoded code-point sequence
    pub literal: Literal,
    /// Status field, trimmed
    pub tag: String,
}

/// Header information found in comment lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableMetadata {
    /// Value of a `# Version:` header, if present
    pub version: Option<String>,
}

/// A parsed table whose status tags are still plain text.
///
/// Interpreting the tags needs a vintage, which may itself be detected from
/// the tags, so this is the stage in between.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    entries: Vec<RawEntry>,
    metadata: TableMetadata,
}

impl RawTable {
    /// Parse table text
    pub fn parse(text: &str) -> Result<Self> {
        let mut table = RawTable::default();

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                continue;
            }
            if let Some(comment) = trimmed.strip_prefix('#') {
                if let Some(version) = comment.trim().strip_prefix("Version:") {
                    table.metadata.version = Some(version.trim().to_string());
                }
                continue;
            }

            table.entries.push(parse_data_line(line, line_no)?);
        }

        log::debug!(
            "parsed {} data lines (version {:?})",
            table.entries.len(),
            table.metadata.version
        );
        Ok(table)
    }

    /// Data lines in file order
    pub fn entries(&self) -> &[RawEntry] {
        &self.entries
    }

    /// Header information
    pub fn metadata(&self) -> &TableMetadata {
        &self.metadata
    }

    /// Guess the vintage from the status tags present
    pub fn detect_vintage(&self) -> Vintage {
        Vintage::detect(self.entries.iter().map(|e| e.tag.as_str()))
    }

    /// Interpret status tags and build the literal table.
    ///
    /// Later lines overwrite earlier ones for the same literal.
    pub fn to_table<S: StatusTag>(&self) -> Result<LiteralTable<S>> {
        let mut table = LiteralTable::new();
        for entry in &self.entries {
            let status = S::parse_tag(&entry.tag).ok_or_else(|| EngineError::Parse {
                line: entry.line,
                reason: format!("unknown status tag '{}'", entry.tag),
            })?;
            if let Some(previous) = table.insert(entry.literal.clone(), status) {
                log::debug!(
                    "line {}: {} listed again, {} replaces {}",
                    entry.line,
                    entry.literal,
                    status.as_tag(),
                    previous.as_tag()
                );
            }
        }
        if table.overwrites() > 0 {
            log::warn!(
                "{} duplicate entries overwritten by later lines",
                table.overwrites()
            );
        }
        Ok(table)
    }

    /// Counts and header data for reporting
    pub fn summary<S: StatusTag>(&self, vintage: Vintage, table: &LiteralTable<S>) -> TableSummary {
        let statuses = table
            .counts_by_status()
            .into_iter()
            .map(|(status, count)| (status.as_tag().to_string(), count))
            .collect();

        TableSummary {
            vintage,
            version: self.metadata.version.clone(),
            data_lines: self.entries.len(),
            literals: table.len(),
            overwrites: table.overwrites(),
            statuses,
        }
    }
}

/// Size report of a loaded table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    /// Vintage the table was read as
    pub vintage: Vintage,
    /// `# Version:` header value
    pub version: Option<String>,
    /// Non-comment lines
    pub data_lines: usize,
    /// Distinct literals after overwrites
    pub literals: usize,
    /// Lines that replaced an earlier entry
    pub overwrites: usize,
    /// Distinct literals per status tag
    pub statuses: BTreeMap<String, usize>,
}

fn parse_data_line(line: &str, line_no: usize) -> Result<RawEntry> {
    let parse_err = |reason: String| EngineError::Parse {
        line: line_no,
        reason,
    };

    let data = match line.find('#') {
        Some(hash) => &line[..hash],
        None => line,
    };

    let mut fields = data.split(';');
    let code_field = fields.next().unwrap_or_default().trim();
    let tag = fields
        .next()
        .map(str::trim)
        .ok_or_else(|| parse_err("missing ';' before status".to_string()))?;
    if tag.is_empty() {
        return Err(parse_err("empty status field".to_string()));
    }

    let code_points = code_field
        .split_whitespace()
        .map(|hex| {
            u32::from_str_radix(hex, 16)
                .map_err(|e| parse_err(format!("invalid code point '{hex}': {e}")))
        })
        .collect::<Result<Vec<u32>>>()?;
    if code_points.is_empty() {
        return Err(parse_err("no code points".to_string()));
    }

    Ok(RawEntry {
        line: line_no,
        literal: Literal::from_code_points(code_points),
        tag: tag.to_string(),
    })
}
