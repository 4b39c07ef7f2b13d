//! Rendering expression trees as regular-expression text

use crate::error::{CoreError, Result};
use crate::expr::Expr;
use crate::literal::LiteralSet;
use crate::trie::Trie;
use std::fmt;
use std::str::FromStr;

/// Fragment used for an empty literal set: an empty character class,
/// accepted by both dialects and never matching.
pub const NEVER_MATCH: &str = r"[^\s\S]";

const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Target regular-expression syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// The `regex` crate
    #[default]
    Rust,
    /// ECMAScript with the `u` flag
    JavaScript,
}

impl Dialect {
    /// All supported dialects
    pub const ALL: [Dialect; 2] = [Dialect::Rust, Dialect::JavaScript];

    /// Short identifier
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Rust => "rust",
            Dialect::JavaScript => "javascript",
        }
    }

    fn is_meta(&self, ch: char) -> bool {
        match self {
            Dialect::Rust => matches!(
                ch,
                '\\' | '.'
                    | '+'
                    | '*'
                    | '?'
                    | '('
                    | ')'
                    | '|'
                    | '['
                    | ']'
                    | '{'
                    | '}'
                    | '^'
                    | '$'
                    | '#'
                    | '&'
                    | '-'
                    | '~'
            ),
            Dialect::JavaScript => matches!(
                ch,
                '^' | '$' | '\\' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}'
                    | '|'
                    | '/'
            ),
        }
    }

    fn is_class_meta(&self, ch: char) -> bool {
        match self {
            Dialect::Rust => matches!(ch, '\\' | '[' | ']' | '^' | '-' | '&' | '~'),
            Dialect::JavaScript => matches!(ch, '\\' | '[' | ']' | '^' | '-' | '/'),
        }
    }

    /// Escape sequence for an arbitrary code point, if the dialect has one
    fn escape_code_point(&self, cp: u32) -> Option<String> {
        if cp > MAX_CODE_POINT {
            return None;
        }
        match self {
            // the regex crate only accepts Unicode scalar values
            Dialect::Rust if (0xD800..=0xDFFF).contains(&cp) => None,
            Dialect::Rust => Some(format!("\\x{{{cp:04X}}}")),
            Dialect::JavaScript => Some(format!("\\u{{{cp:04X}}}")),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rust" | "regex" => Ok(Dialect::Rust),
            "javascript" | "js" | "ecmascript" => Ok(Dialect::JavaScript),
            other => Err(format!("unknown regex dialect: {other}")),
        }
    }
}

/// How non-ASCII code points are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnicodeStyle {
    /// As the characters themselves
    #[default]
    Literal,
    /// As dialect escape sequences
    Escaped,
}

/// Turns factored expressions into pattern text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Renderer {
    dialect: Dialect,
    unicode: UnicodeStyle,
}

impl Renderer {
    /// Create a renderer
    pub fn new(dialect: Dialect, unicode: UnicodeStyle) -> Self {
        Self { dialect, unicode }
    }

    /// Target dialect
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Non-ASCII style
    pub fn unicode_style(&self) -> UnicodeStyle {
        self.unicode
    }

    /// Render a trie as an unwrapped fragment
    pub fn render_trie(&self, trie: &Trie) -> Result<String> {
        self.render(&Expr::from_trie(trie))
    }

    /// Build, factor and render a literal set, wrapped in `(?:...)`
    pub fn compile(&self, set: &LiteralSet) -> Result<String> {
        let trie = Trie::from_set(set)?;
        Ok(format!("(?:{})", self.render_trie(&trie)?))
    }

    /// Render an expression as an unwrapped fragment
    pub fn render(&self, expr: &Expr) -> Result<String> {
        let mut out = String::new();
        self.write_expr(&mut out, expr)?;
        Ok(out)
    }

    fn write_expr(&self, out: &mut String, expr: &Expr) -> Result<()> {
        // Nesting follows the longest literal, so walk with an explicit stack.
        // Items are pushed in reverse so they pop in output order.
        let mut stack = vec![Step::Expr(expr)];
        while let Some(step) = stack.pop() {
            let expr = match step {
                Step::Text(text) => {
                    out.push_str(text);
                    continue;
                }
                Step::Expr(expr) => expr,
            };
            match expr {
                Expr::Empty => {}
                Expr::Nothing => out.push_str(NEVER_MATCH),
                Expr::Char(cp) => self.write_char(out, *cp, false)?,
                Expr::Class(cps) => self.write_class(out, cps)?,
                Expr::Concat(parts) => {
                    for part in parts.iter().rev() {
                        if matches!(part, Expr::Alt(_)) {
                            push_group(&mut stack, part);
                        } else {
                            stack.push(Step::Expr(part));
                        }
                    }
                }
                Expr::Alt(alternatives) => {
                    for (i, alternative) in alternatives.iter().enumerate().rev() {
                        stack.push(Step::Expr(alternative));
                        if i > 0 {
                            stack.push(Step::Text("|"));
                        }
                    }
                }
                Expr::Optional(inner) => {
                    stack.push(Step::Text("?"));
                    if inner.is_single_char() {
                        stack.push(Step::Expr(inner));
                    } else {
                        push_group(&mut stack, inner);
                    }
                }
            }
        }
        Ok(())
    }

    fn write_class(&self, out: &mut String, cps: &[u32]) -> Result<()> {
        out.push('[');
        let mut i = 0;
        while i < cps.len() {
            let start = cps[i];
            let mut end = i;
            while end + 1 < cps.len() && cps[end + 1] == cps[end] + 1 {
                end += 1;
            }
            // runs of three or more become ranges
            if end - i >= 2 {
                self.write_char(out, start, true)?;
                out.push('-');
                self.write_char(out, cps[end], true)?;
                i = end + 1;
            } else {
                self.write_char(out, start, true)?;
                i += 1;
            }
        }
        out.push(']');
        Ok(())
    }

    fn write_char(&self, out: &mut String, cp: u32, in_class: bool) -> Result<()> {
        let unsupported = || CoreError::UnsupportedCodePoint {
            code_point: cp,
            dialect: self.dialect,
        };

        let escape = |out: &mut String| -> Result<()> {
            let seq = self.dialect.escape_code_point(cp).ok_or_else(unsupported)?;
            out.push_str(&seq);
            Ok(())
        };

        match char::from_u32(cp) {
            Some(ch) if ch.is_ascii_control() => escape(out),
            Some(ch) if ch.is_ascii() => {
                let meta = if in_class {
                    self.dialect.is_class_meta(ch)
                } else {
                    self.dialect.is_meta(ch)
                };
                if meta {
                    out.push('\\');
                }
                out.push(ch);
                Ok(())
            }
            Some(ch) if self.unicode == UnicodeStyle::Literal => {
                out.push(ch);
                Ok(())
            }
            _ => escape(out),
        }
    }
}

enum Step<'a> {
    Expr(&'a Expr),
    Text(&'static str),
}

fn push_group<'a>(stack: &mut Vec<Step<'a>>, expr: &'a Expr) {
    stack.push(Step::Text(")"));
    stack.push(Step::Expr(expr));
    stack.push(Step::Text("(?:"));
}
