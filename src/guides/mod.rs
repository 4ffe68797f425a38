//! Lookup guides over the catalog tables.
//!
//! Every guide filters with the same three building blocks: a case-insensitive
//! [`TextQuery`], a [`CategoryFilter`] and, for substitutions, a
//! [`DietaryFilter`] that only keeps records carrying *all* selected tags.
//! Unless a sort key is chosen, results keep the table's declaration order.

pub mod cheese;
pub mod chocolate;
pub mod coffee;
pub mod flavor;
pub mod glycemic;
pub mod herbs;
pub mod substitutions;

use crate::catalog::DietaryTag;
use serde::Serialize;
use std::str::FromStr;

/// Case-insensitive substring search. An empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// True when the query is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.needle.trim().is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }

    pub fn matches_any<'a>(&self, texts: impl IntoIterator<Item = &'a str>) -> bool {
        texts.into_iter().any(|t| self.matches(t))
    }
}

impl From<&str> for TextQuery {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}

/// Either every category or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryFilter<T> {
    All,
    Only(T),
}

impl<T> Default for CategoryFilter<T> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<T: PartialEq> CategoryFilter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == value,
        }
    }
}

/// Parses `"all"` or any tag `T` parses from.
impl<T: FromStr> FromStr for CategoryFilter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// A set of required dietary tags, in the order they were switched on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DietaryFilter {
    selected: Vec<DietaryTag>,
}

impl DietaryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches a tag on, or off if it was already on.
    pub fn toggle(&mut self, tag: DietaryTag) {
        match self.selected.iter().position(|t| *t == tag) {
            Some(pos) => {
                self.selected.remove(pos);
            }
            None => self.selected.push(tag),
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, tag: DietaryTag) -> bool {
        self.selected.contains(&tag)
    }

    pub fn selected(&self) -> &[DietaryTag] {
        &self.selected
    }

    /// True when `tags` has every selected tag.
    pub fn matches(&self, tags: &[DietaryTag]) -> bool {
        self.selected.iter().all(|t| tags.contains(t))
    }
}

impl FromIterator<DietaryTag> for DietaryFilter {
    fn from_iter<I: IntoIterator<Item = DietaryTag>>(iter: I) -> Self {
        let mut filter = Self::new();
        for tag in iter {
            if !filter.contains(tag) {
                filter.selected.push(tag);
            }
        }
        filter
    }
}

/// One labelled list of pairings of a cheese, coffee or chocolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairingGroup<'a> {
    pub key: &'static str,
    pub label: &'static str,
    pub items: &'a [String],
}

/// Builds the non-empty groups, keeping the given order.
pub(crate) fn groups<'a>(
    entries: impl IntoIterator<Item = (&'static str, &'static str, &'a [String])>,
) -> Vec<PairingGroup<'a>> {
    entries
        .into_iter()
        .filter(|(_, _, items)| !items.is_empty())
        .map(|(key, label, items)| PairingGroup { key, label, items })
        .collect()
}
