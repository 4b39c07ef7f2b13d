//! Category-to-pattern output and the per-category compile step

use crate::error::Result;
use crate::literal::LiteralTable;
use crate::render::Renderer;
use crate::status::{Category, StatusTag};

/// Ordered mapping from category name to a `(?:...)` pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    entries: Vec<(String, String)>,
}

impl PatternSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the pattern for `name`, keeping first-insertion order
    pub fn insert(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        let name = name.into();
        let pattern = pattern.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = pattern,
            None => self.entries.push((name, pattern)),
        }
    }

    /// Pattern for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p.as_str())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p.as_str()))
    }

    /// Category names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no category was compiled
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for PatternSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, pattern) in iter {
            set.insert(name, pattern);
        }
        set
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PatternSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Filter `table` by `category` and compile the subset into one pattern
pub fn compile_category<S: StatusTag>(
    table: &LiteralTable<S>,
    category: &Category<S>,
    renderer: &Renderer,
) -> Result<String> {
    let subset = table.filter(|status| category.matches(status));
    renderer.compile(&subset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Literal;
    use crate::status::{Qualification, QualifiedScheme, StatusScheme};

    #[test]
    fn test_pattern_set_keeps_order_and_replaces() {
        let mut set = PatternSet::new();
        set.insert("All", "(?:a)");
        set.insert("Keyboard", "(?:b)");
        set.insert("All", "(?:c)");

        let names: Vec<_> = set.names().collect();
        assert_eq!(names, vec!["All", "Keyboard"]);
        assert_eq!(set.get("All"), Some("(?:c)"));
        assert_eq!(set.get("Display"), None);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_compile_category_empty_subset() {
        let table: LiteralTable<Qualification> =
            [(Literal::from("a"), Qualification::FullyQualified)]
                .into_iter()
                .collect();
        let component = QualifiedScheme::category("Component").unwrap();

        let pattern = compile_category(&table, component, &Renderer::default()).unwrap();
        assert_eq!(pattern, r"(?:[^\s\S])");
    }

    #[test]
    fn test_compile_category_selects_statuses() {
        let table: LiteralTable<Qualification> = [
            (Literal::from("x"), Qualification::FullyQualified),
            (Literal::from("y"), Qualification::Unqualified),
        ]
        .into_iter()
        .collect();
        let keyboard = QualifiedScheme::category("Keyboard").unwrap();

        let pattern = compile_category(&table, keyboard, &Renderer::default()).unwrap();
        assert_eq!(pattern, "(?:x)");
    }
}
