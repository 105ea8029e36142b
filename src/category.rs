//! Filename-based category detection and the gallery filter.
//!
//! Categories are guessed from keywords in the filename. The rules live in a
//! single ordered table ([`RULES`]); the first rule with a matching keyword
//! wins, so precedence is simply table order:
//!
//! ```text
//! portraits  ← portrait, people, person
//! landscape  ← landscape, scenery
//! ai         ← ai, generated, midjourney, stable
//! edits      ← edit, before, after
//! uncategorized (fallback)
//! ```
//!
//! Matching is a case-insensitive substring test, nothing smarter. A name like
//! `mountain-lake.jpg` lands in `ai` because it contains "ai".

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of gallery categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Portraits,
    Landscape,
    Ai,
    Edits,
    Uncategorized,
}

impl Category {
    /// Every category, in the order the filter bar shows them.
    pub const ALL: [Category; 5] = [
        Category::Portraits,
        Category::Landscape,
        Category::Ai,
        Category::Edits,
        Category::Uncategorized,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Portraits => "portraits",
            Category::Landscape => "landscape",
            Category::Ai => "ai",
            Category::Edits => "edits",
            Category::Uncategorized => "uncategorized",
        }
    }
}

/// Categories order by their label, so catalog sorting groups `ai` first and
/// `uncategorized` last.
impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown filter '{0}' (expected all, portraits, landscape, ai, edits or uncategorized)")]
pub struct UnknownLabel(pub String);

impl FromStr for Category {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Keyword rules evaluated top to bottom. Keywords are lowercase.
pub const RULES: &[(&[&str], Category)] = &[
    (&["portrait", "people", "person"], Category::Portraits),
    (&["landscape", "scenery"], Category::Landscape),
    (&["ai", "generated", "midjourney", "stable"], Category::Ai),
    (&["edit", "before", "after"], Category::Edits),
];

/// Guess a category from a filename. Always returns a category.
pub fn categorize(filename: &str) -> Category {
    let lower = filename.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Uncategorized)
}

/// The active gallery filter: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// The filter bar: `all` followed by every category.
    pub fn choices() -> impl Iterator<Item = Filter> {
        std::iter::once(Filter::All).chain(Category::ALL.into_iter().map(Filter::Only))
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(c) => c == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(c) => c.as_str(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Filter {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}
