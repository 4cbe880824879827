//! # Catalog Wire Types
//!
//! Serde shapes for what catalog sources return. Every field carries a default
//! so partial or trimmed-down JSON (for example hand-written local files)
//! still parses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use crate::core::item::CatalogEntry;

// ============================================================================
// Catalog listing
// ============================================================================

/// A catalog listing: either a bare array of entries or the paged
/// `{ "results": [...] }` envelope.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum CatalogResponse {
    Bare(Vec<CatalogEntry>),
    Page {
        #[serde(default)]
        results: Vec<CatalogEntry>,
    },
}

impl CatalogResponse {
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        match self {
            CatalogResponse::Page { results } => results,
            CatalogResponse::Bare(entries) => entries,
        }
    }
}

// ============================================================================
// Detail record
// ============================================================================

/// A `{ name, url }` reference to another resource.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NamedResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AbilitySlot {
    #[serde(default)]
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct StatValue {
    #[serde(default)]
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    #[serde(default)]
    pub stat: NamedResource,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type", default)]
    pub kind: NamedResource,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MoveEntry {
    #[serde(rename = "move", default)]
    pub entry: NamedResource,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct HeldItem {
    #[serde(default)]
    pub item: NamedResource,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GameIndex {
    #[serde(default)]
    pub game_index: u32,
    #[serde(default)]
    pub version: NamedResource,
}

/// Sprite URLs. Top-level entries are plain URLs (or null); `other` holds
/// nested artwork sets such as `official-artwork`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub other: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}

/// The record behind one item's detail screen.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CreatureDetail {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Decimetres.
    #[serde(default)]
    pub height: u32,
    /// Hectograms.
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatValue>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub moves: Vec<MoveEntry>,
    #[serde(default)]
    pub held_items: Vec<HeldItem>,
    #[serde(default)]
    pub game_indices: Vec<GameIndex>,
    #[serde(default)]
    pub species: NamedResource,
    #[serde(default)]
    pub forms: Vec<NamedResource>,
    #[serde(default)]
    pub sprites: Sprites,
}

/// Stats in the order the detail screen lists them.
pub const STAT_ORDER: [&str; 6] = [
    "hp",
    "speed",
    "attack",
    "special-attack",
    "defense",
    "special-defense",
];

impl CreatureDetail {
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat.name == name)
            .map(|s| s.base_stat)
    }

    pub fn visible_abilities(&self) -> Vec<&str> {
        self.abilities
            .iter()
            .filter(|a| !a.is_hidden)
            .map(|a| a.ability.name.as_str())
            .collect()
    }

    pub fn hidden_ability(&self) -> Option<&str> {
        self.abilities
            .iter()
            .find(|a| a.is_hidden)
            .map(|a| a.ability.name.as_str())
    }

    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    /// All top-level sprite URLs that are set, front before back.
    pub fn sprite_urls(&self) -> Vec<&str> {
        [
            &self.sprites.front_default,
            &self.sprites.front_shiny,
            &self.sprites.back_default,
            &self.sprites.back_shiny,
        ]
        .into_iter()
        .filter_map(|url| url.as_deref())
        .collect()
    }

    /// Best image to feature: official artwork, then its shiny variant, then
    /// the first plain sprite.
    pub fn artwork_url(&self) -> Option<&str> {
        let artwork = self.sprites.other.get("official-artwork");
        let pick = |key: &str| {
            artwork
                .and_then(|set| set.get(key))
                .and_then(|value| value.as_str())
        };
        pick("front_default")
            .or_else(|| pick("front_shiny"))
            .or_else(|| self.sprite_urls().into_iter().next())
    }
}
