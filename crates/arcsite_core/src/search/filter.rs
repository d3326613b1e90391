//! Free-text and tag-facet filtering over loaded collections.
//!
//! # Responsibility
//! - Provide the pure filter shared by the article and team listings.
//! - Collect facet tags and build chip projections for facet controls.
//!
//! # Invariants
//! - Filtering preserves original relative order and never reorders.
//! - The all-items facet bypasses tag filtering entirely.
//! - Tag matching is exact and case-sensitive; query matching is
//!   lowercased substring containment.
//! - Output is identical for identical inputs; no hidden state.

use crate::format::normalize;
use crate::model::article::Article;
use crate::model::team::TeamMember;
use std::collections::HashSet;

/// Single-valued filter dimension over an item's tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet {
    /// Sentinel: no tag filter, every item passes.
    All,
    /// Exact, case-sensitive tag match.
    Tag(String),
}

impl Facet {
    /// Display label for facet controls.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Tag(name) => name,
        }
    }

    /// Whether an item with `tags` passes this facet.
    pub fn matches(&self, tags: &[String]) -> bool {
        match self {
            Self::All => true,
            Self::Tag(name) => tags.iter().any(|tag| tag == name),
        }
    }
}

/// One facet control projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub facet: Facet,
    pub active: bool,
}

/// Items that can be searched and faceted.
pub trait Searchable {
    /// Free-text fields contributing to the search key.
    fn search_fields(&self) -> Vec<&str>;
    /// Tag sequence contributing to the search key and facet matching.
    fn tags(&self) -> &[String];
}

impl Searchable for Article {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_deref().unwrap_or(""),
            self.excerpt.as_deref().unwrap_or(""),
        ]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for TeamMember {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_deref().unwrap_or(""),
            self.role.as_deref().unwrap_or(""),
            self.bio.as_deref().unwrap_or(""),
        ]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Space-joined, lowercased search key for one item.
pub fn search_key<T: Searchable>(item: &T) -> String {
    let mut parts: Vec<String> = item
        .search_fields()
        .into_iter()
        .map(|field| normalize(Some(field)))
        .collect();
    parts.extend(item.tags().iter().map(|tag| normalize(Some(tag))));
    parts.join(" ")
}

/// Filters `items` by active facet, then by free-text query.
///
/// Both conditions are conjunctive. The empty (normalized) query matches
/// everything, so `filter(items, "", Facet::All)` is the identity.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str, facet: &Facet) -> Vec<&'a T> {
    let query = normalize(Some(query));
    items
        .iter()
        .filter(|item| facet.matches(item.tags()))
        .filter(|item| query.is_empty() || search_key(*item).contains(&query))
        .collect()
}

/// Union of all tags across items, first-occurrence order, blanks dropped.
pub fn collect_tags<T: Searchable>(items: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for item in items {
        for tag in item.tags() {
            let key = tag.trim();
            if key.is_empty() || !seen.insert(key.to_string()) {
                continue;
            }
            ordered.push(key.to_string());
        }
    }
    ordered
}

/// Builds the chip row: the synthetic all-chip first, then `tags` in the
/// order given (callers wanting alphabetical order sort beforehand).
pub fn build_chips(tags: &[String], active: &Facet) -> Vec<Chip> {
    let mut chips = vec![Chip {
        facet: Facet::All,
        active: matches!(active, Facet::All),
    }];
    chips.extend(tags.iter().map(|tag| Chip {
        facet: Facet::Tag(tag.clone()),
        active: matches!(active, Facet::Tag(current) if current == tag),
    }));
    chips
}
