//! Status-tag domains and the category tables of each data-table vintage
//!
//! Older tables (Emoji 11.0 and before) effectively carry a boolean
//! "fully-qualified or not"; newer ones (Emoji 12.0 onward) distinguish
//! `component`, `fully-qualified`, `minimally-qualified` and `unqualified`.
//! Both are served by the same generic pipeline, parameterized by a
//! [`StatusScheme`].

use std::fmt;
use std::str::FromStr;

/// A per-vintage qualification status
pub trait StatusTag: Copy + Eq + Ord + fmt::Debug + Send + Sync + 'static {
    /// Parse the status field of a table line
    fn parse_tag(tag: &str) -> Option<Self>;

    /// Canonical tag text
    fn as_tag(&self) -> &'static str;
}

/// Enumerated status model of newer tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Qualification {
    /// Building block such as a skin-tone modifier
    Component,
    /// Keyboard-ready sequence
    FullyQualified,
    /// Missing some, but not the first, presentation selector
    MinimallyQualified,
    /// Missing the first presentation selector
    Unqualified,
}

impl StatusTag for Qualification {
    fn parse_tag(tag: &str) -> Option<Self> {
        match tag {
            "component" => Some(Qualification::Component),
            "fully-qualified" => Some(Qualification::FullyQualified),
            "minimally-qualified" => Some(Qualification::MinimallyQualified),
            "unqualified" => Some(Qualification::Unqualified),
            _ => None,
        }
    }

    fn as_tag(&self) -> &'static str {
        match self {
            Qualification::Component => "component",
            Qualification::FullyQualified => "fully-qualified",
            Qualification::MinimallyQualified => "minimally-qualified",
            Qualification::Unqualified => "unqualified",
        }
    }
}

/// Boolean status model of older tables.
///
/// Any tag other than `fully-qualified` is read as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FullyQualified(pub bool);

impl StatusTag for FullyQualified {
    fn parse_tag(tag: &str) -> Option<Self> {
        Some(FullyQualified(tag == "fully-qualified"))
    }

    fn as_tag(&self) -> &'static str {
        if self.0 {
            "fully-qualified"
        } else {
            "non-fully-qualified"
        }
    }
}

/// A named output category and the statuses it selects
pub struct Category<S> {
    name: &'static str,
    predicate: fn(S) -> bool,
}

impl<S: StatusTag> Category<S> {
    /// Create a category
    pub const fn new(name: &'static str, predicate: fn(S) -> bool) -> Self {
        Self { name, predicate }
    }

    /// Category name as it appears in the output mapping
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether a literal with `status` belongs to this category
    pub fn matches(&self, status: S) -> bool {
        (self.predicate)(status)
    }
}

impl<S> fmt::Debug for Category<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Category").field("name", &self.name).finish()
    }
}

/// Status domain of one table vintage together with its category table
pub trait StatusScheme {
    /// Status tag type
    type Status: StatusTag;

    /// Short identifier of the vintage
    const NAME: &'static str;

    /// Categories produced for this vintage, in output order
    fn categories() -> &'static [Category<Self::Status>];

    /// Look up a category by name
    fn category(name: &str) -> Option<&'static Category<Self::Status>> {
        Self::categories().iter().find(|c| c.name() == name)
    }
}

fn any_status<S>(_: S) -> bool {
    true
}

fn is_fully_qualified_flag(status: FullyQualified) -> bool {
    status.0
}

fn is_component(status: Qualification) -> bool {
    status == Qualification::Component
}

fn is_fully_qualified(status: Qualification) -> bool {
    status == Qualification::FullyQualified
}

fn is_display_only(status: Qualification) -> bool {
    matches!(
        status,
        Qualification::MinimallyQualified | Qualification::Unqualified
    )
}

/// Boolean-status vintage (Emoji 11.0 and earlier)
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanScheme;

static BOOLEAN_CATEGORIES: [Category<FullyQualified>; 2] = [
    Category::new("All", any_status::<FullyQualified>),
    Category::new("Keyboard", is_fully_qualified_flag),
];

impl StatusScheme for BooleanScheme {
    type Status = FullyQualified;
    const NAME: &'static str = "v11";

    fn categories() -> &'static [Category<FullyQualified>] {
        &BOOLEAN_CATEGORIES
    }
}

/// Enumerated-status vintage (Emoji 12.0 onward)
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifiedScheme;

static QUALIFIED_CATEGORIES: [Category<Qualification>; 4] = [
    Category::new("All", any_status::<Qualification>),
    Category::new("Component", is_component),
    Category::new("Keyboard", is_fully_qualified),
    Category::new("Display", is_display_only),
];

impl StatusScheme for QualifiedScheme {
    type Status = Qualification;
    const NAME: &'static str = "v12";

    fn categories() -> &'static [Category<Qualification>] {
        &QUALIFIED_CATEGORIES
    }
}

/// Runtime selector between the supported table vintages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Vintage {
    /// Boolean status model
    V11,
    /// Enumerated status model
    V12,
}

impl Vintage {
    /// All supported vintages
    pub const ALL: [Vintage; 2] = [Vintage::V11, Vintage::V12];

    /// Short identifier
    pub fn name(&self) -> &'static str {
        match self {
            Vintage::V11 => BooleanScheme::NAME,
            Vintage::V12 => QualifiedScheme::NAME,
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Vintage::V11 => "boolean status model (fully-qualified or not)",
            Vintage::V12 => "component / fully-qualified / minimally-qualified / unqualified",
        }
    }

    /// Category names produced for this vintage, in output order
    pub fn category_names(&self) -> Vec<&'static str> {
        match self {
            Vintage::V11 => BooleanScheme::categories().iter().map(Category::name).collect(),
            Vintage::V12 => QualifiedScheme::categories()
                .iter()
                .map(Category::name)
                .collect(),
        }
    }

    /// Guess the vintage from the status tags found in a table.
    ///
    /// Any tag that only exists in the enumerated model selects `V12`.
    pub fn detect<'a, I>(tags: I) -> Vintage
    where
        I: IntoIterator<Item = &'a str>,
    {
        let newer = tags.into_iter().any(|tag| {
            matches!(
                Qualification::parse_tag(tag),
                Some(
                    Qualification::Component
                        | Qualification::MinimallyQualified
                        | Qualification::Unqualified
                )
            )
        });
        if newer {
            Vintage::V12
        } else {
            Vintage::V11
        }
    }
}

impl fmt::Display for Vintage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Vintage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v11" | "11" | "boolean" => Ok(Vintage::V11),
            "v12" | "12" | "qualified" => Ok(Vintage::V12),
            other => Err(format!("unknown table vintage: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualification_round_trips_tags() {
        for tag in [
            "component",
            "fully-qualified",
            "minimally-qualified",
            "unqualified",
        ] {
            let status = Qualification::parse_tag(tag).unwrap();
            assert_eq!(status.as_tag(), tag);
        }
        assert_eq!(Qualification::parse_tag("non-fully-qualified"), None);
    }

    #[test]
    fn test_boolean_status_reads_everything_else_as_false() {
        assert_eq!(
            FullyQualified::parse_tag("fully-qualified"),
            Some(FullyQualified(true))
        );
        assert_eq!(
            FullyQualified::parse_tag("non-fully-qualified"),
            Some(FullyQualified(false))
        );
        assert_eq!(
            FullyQualified::parse_tag("unqualified"),
            Some(FullyQualified(false))
        );
    }

    #[test]
    fn test_boolean_categories() {
        let names: Vec<_> = BooleanScheme::categories().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["All", "Keyboard"]);

        let keyboard = BooleanScheme::category("Keyboard").unwrap();
        assert!(keyboard.matches(FullyQualified(true)));
        assert!(!keyboard.matches(FullyQualified(false)));

        let all = BooleanScheme::category("All").unwrap();
        assert!(all.matches(FullyQualified(false)));
    }

    #[test]
    fn test_qualified_categories() {
        use Qualification as Q;

        let component = QualifiedScheme::category("Component").unwrap();
        assert!(component.matches(Q::Component));
        assert!(!component.matches(Q::FullyQualified));

        let keyboard = QualifiedScheme::category("Keyboard").unwrap();
        assert!(keyboard.matches(Q::FullyQualified));
        assert!(!keyboard.matches(Q::MinimallyQualified));

        let display = QualifiedScheme::category("Display").unwrap();
        assert!(display.matches(Q::MinimallyQualified));
        assert!(display.matches(Q::Unqualified));
        assert!(!display.matches(Q::FullyQualified));
        assert!(!display.matches(Q::Component));

        assert!(QualifiedScheme::category("Nope").is_none());
    }

    #[test]
    fn test_vintage_detect() {
        assert_eq!(
            Vintage::detect(["fully-qualified", "non-fully-qualified"]),
            Vintage::V11
        );
        assert_eq!(
            Vintage::detect(["fully-qualified", "unqualified"]),
            Vintage::V12
        );
        assert_eq!(Vintage::detect(["component"]), Vintage::V12);
        assert_eq!(Vintage::detect(Vec::<&str>::new()), Vintage::V11);
    }

    #[test]
    fn test_vintage_from_str() {
        assert_eq!("v11".parse::<Vintage>(), Ok(Vintage::V11));
        assert_eq!("V12".parse::<Vintage>(), Ok(Vintage::V12));
        assert!("v13".parse::<Vintage>().is_err());
    }

    #[test]
    fn test_vintage_category_names() {
        assert_eq!(Vintage::V11.category_names(), vec!["All", "Keyboard"]);
        assert_eq!(
            Vintage::V12.category_names(),
            vec!["All", "Component", "Keyboard", "Display"]
        );
    }
}
