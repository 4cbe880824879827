//! # Items and the Catalog
//!
//! The catalog source hands us `{ name, url }` pairs. Each becomes an `Item`
//! whose `id` is the last non-empty path segment of the URL:
//!
//! ```text
//! https://pokeapi.co/api/v2/pokemon/25/   →   id "25"
//! ```
//!
//! Entries whose URL doesn't end in a numeric segment keep an empty id rather
//! than being dropped. The catalog is built once per browsing session and is
//! never mutated afterwards; its order is the display order.

use serde::{Deserialize, Serialize};

/// A raw catalog entry as delivered by a catalog source.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A single browsable item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    /// Hyphen-delimited lowercase token, e.g. `"special-form"`.
    pub name: String,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            id: id_from_url(&entry.url),
            name: entry.name.clone(),
        }
    }

    /// The name with hyphens replaced by spaces. This is what searches match against.
    pub fn search_name(&self) -> String {
        self.name.replace('-', " ")
    }

    /// Title-cased name for display: `"special-form"` → `"Special Form"`.
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }
}

/// Extracts the id from a resource URL: its last non-empty path segment.
///
/// Query strings and fragments are ignored. Returns an empty string when the
/// path has no non-empty segment.
pub fn id_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    path.split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
        .unwrap_or_default()
}

/// Title-cases each hyphen-separated token and joins them with spaces.
pub fn display_name(name: &str) -> String {
    name.split('-')
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The immutable, ordered list of items for one browsing session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let items = entries.into_iter().map(|e| Item::from_entry(&e)).collect();
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}
