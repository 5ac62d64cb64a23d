//! Menu filter pipeline
//!
//! Four predicates combined with AND:
//!
//! | Criterion | Match rule |
//! |-----------|------------|
//! | location | equal ignoring case, or "all" |
//! | meal | equal ignoring case, or "all" |
//! | tag | member of the item's tags, or "all" |
//! | search | trimmed, case-insensitive substring of `"<name> <description>"` |
//!
//! Filtering is pure: same criteria + same items ⇒ same output, in input
//! order. Values nobody carries yield an empty result rather than an error.

use shared::models::MenuItem;
use std::fmt;
use std::str::FromStr;

/// "all" or one concrete value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Exact comparison (tags, campuses)
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    /// Case-insensitive comparison (locations, meals)
    pub fn matches_ignore_case(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted.to_lowercase() == value.to_lowercase(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<&str> for Selection {
    fn from(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(raw.to_string())
        }
    }
}

impl FromStr for Selection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(value) => write!(f, "{value}"),
        }
    }
}

/// Active menu filter criteria
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuFilter {
    pub location: Selection,
    pub meal: Selection,
    pub tag: Selection,
    /// Free text; blank matches everything
    pub search: String,
}

impl MenuFilter {
    /// Filter with every criterion open
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: impl Into<Selection>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_meal(mut self, meal: impl Into<Selection>) -> Self {
        self.meal = meal.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<Selection>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Whether no criterion narrows the list
    pub fn is_open(&self) -> bool {
        self.location.is_all() && self.meal.is_all() && self.tag.is_all() && self.search.trim().is_empty()
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        let search = self.search.trim().to_lowercase();
        self.matches_with_needle(item, &search)
    }

    fn matches_with_needle(&self, item: &MenuItem, needle: &str) -> bool {
        let by_location = self.location.matches_ignore_case(&item.location);
        let by_meal = self.meal.matches_ignore_case(&item.meal);
        let by_tag = match &self.tag {
            Selection::All => true,
            Selection::Only(tag) => item.has_tag(tag),
        };
        let by_search = needle.is_empty()
            || format!("{} {}", item.name, item.description)
                .to_lowercase()
                .contains(needle);

        by_location && by_meal && by_tag && by_search
    }

    /// Matching items, original order preserved
    pub fn apply<'a>(&self, items: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        let needle = self.search.trim().to_lowercase();
        items
            .iter()
            .filter(|item| self.matches_with_needle(item, &needle))
            .collect()
    }
}

/// Free-function form of [`MenuFilter::apply`]
pub fn apply_filters<'a>(items: &'a [MenuItem], filter: &MenuFilter) -> Vec<&'a MenuItem> {
    filter.apply(items)
}
