//! Literal sequences, literal sets and the status-tagged literal table

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// One recognized unit: an ordered sequence of code points.
///
/// Values are kept as raw `u32` so a table can carry code points the target
/// regex dialect cannot express; the renderer is where those are rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    code_points: Vec<u32>,
}

impl Literal {
    /// Create a literal from raw code points
    pub fn from_code_points(code_points: Vec<u32>) -> Self {
        Self { code_points }
    }

    /// The code points of this literal
    pub fn code_points(&self) -> &[u32] {
        &self.code_points
    }

    /// Length in code points (never bytes)
    pub fn len(&self) -> usize {
        self.code_points.len()
    }

    /// Whether the literal has no code points
    pub fn is_empty(&self) -> bool {
        self.code_points.is_empty()
    }

    /// Decode into a `String`, or `None` if any value is not a Unicode scalar
    pub fn to_text(&self) -> Option<String> {
        self.code_points
            .iter()
            .map(|&cp| char::from_u32(cp))
            .collect()
    }
}

impl From<&str> for Literal {
    fn from(text: &str) -> Self {
        Self::from_code_points(text.chars().map(u32::from).collect())
    }
}

impl From<String> for Literal {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cp) in self.code_points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "U+{cp:04X}")?;
        }
        Ok(())
    }
}

/// A duplicate-free set of literals fed to one trie build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralSet {
    literals: BTreeSet<Literal>,
}

impl LiteralSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a literal, returning `false` if it was already present
    pub fn insert(&mut self, literal: Literal) -> bool {
        self.literals.insert(literal)
    }

    /// Whether the set contains `literal`
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// Number of literals
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Iterate in code-point lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }
}

impl FromIterator<Literal> for LiteralSet {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self {
            literals: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LiteralSet {
    type Item = &'a Literal;
    type IntoIter = std::collections::btree_set::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

/// Mapping from literal to its status tag, as read from a data table.
///
/// Re-inserting a literal overwrites its status (last write wins); the
/// number of overwrites is tracked so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralTable<S> {
    entries: BTreeMap<Literal, S>,
    overwrites: usize,
}

impl<S> Default for LiteralTable<S> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            overwrites: 0,
        }
    }
}

impl<S: Copy> LiteralTable<S> {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `literal` with `status`, returning the status it replaced
    pub fn insert(&mut self, literal: Literal, status: S) -> Option<S> {
        let previous = self.entries.insert(literal, status);
        if previous.is_some() {
            self.overwrites += 1;
        }
        previous
    }

    /// Status currently recorded for `literal`
    pub fn status_of(&self, literal: &Literal) -> Option<S> {
        self.entries.get(literal).copied()
    }

    /// Number of distinct literals
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many inserts replaced an existing entry
    pub fn overwrites(&self) -> usize {
        self.overwrites
    }

    /// Iterate entries in literal order
    pub fn iter(&self) -> impl Iterator<Item = (&Literal, S)> {
        self.entries.iter().map(|(literal, &status)| (literal, status))
    }

    /// The subset of literals whose status satisfies `predicate`
    pub fn filter<F>(&self, predicate: F) -> LiteralSet
    where
        F: Fn(S) -> bool,
    {
        self.iter()
            .filter(|&(_, status)| predicate(status))
            .map(|(literal, _)| literal.clone())
            .collect()
    }

    /// Entry count per status tag
    pub fn counts_by_status(&self) -> BTreeMap<S, usize>
    where
        S: Ord,
    {
        let mut counts = BTreeMap::new();
        for (_, status) in self.iter() {
            *counts.entry(status).or_insert(0) += 1;
        }
        counts
    }
}

impl<S: Copy> FromIterator<(Literal, S)> for LiteralTable<S> {
    fn from_iter<I: IntoIterator<Item = (Literal, S)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (literal, status) in iter {
            table.insert(literal, status);
        }
        table
    }
}
