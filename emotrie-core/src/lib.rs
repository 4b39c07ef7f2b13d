//! Trie-based compression of literal sets into regular-expression alternations
//!
//! Given thousands of literal code-point sequences (emoji sequences, for the
//! `emoji-test.txt` use case) this crate builds a prefix trie, factors it
//! into an expression tree sharing prefixes and identical tails, and renders
//! that tree as a compact pattern fragment in the syntax of the `regex`
//! crate or of ECMAScript `u`-mode.
//!
//! # Architecture
//!
//! - [`literal`]: literals, literal sets, and the status-tagged table
//! - [`status`]: status-tag domains and category tables per table vintage
//! - [`trie`]: the arena-backed prefix trie
//! - [`expr`]: trie → expression factoring
//! - [`render`]: expression → pattern text, per dialect
//! - [`pattern`]: per-category compilation and the output mapping
//!
//! # Example
//!
//! ```rust
//! use emotrie_core::{Literal, LiteralSet, Renderer};
//!
//! let set: LiteralSet = ["#\u{FE0F}\u{20E3}", "#\u{20E3}"]
//!     .into_iter()
//!     .map(Literal::from)
//!     .collect();
//!
//! let pattern = Renderer::default().compile(&set).unwrap();
//! assert_eq!(pattern, "(?:\\#\u{FE0F}?\u{20E3})");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod expr;
pub mod literal;
pub mod pattern;
pub mod render;
pub mod status;
pub mod trie;

pub use error::{CoreError, Result};
pub use expr::Expr;
pub use literal::{Literal, LiteralSet, LiteralTable};
pub use pattern::{compile_category, PatternSet};
pub use render::{Dialect, Renderer, UnicodeStyle, NEVER_MATCH};
pub use status::{
    BooleanScheme, Category, FullyQualified, QualifiedScheme, Qualification, StatusScheme,
    StatusTag, Vintage,
};
pub use trie::{Node, NodeId, Trie};
