//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::catalog::source::{CatalogSource, SourceError};
use crate::catalog::types::{CatalogEntry, CreatureDetail};
use crate::core::action::{update, Action};
use crate::core::item::Item;
use crate::core::nav_state::{MemoryStore, NavigationStore};
use crate::core::state::App;

/// A handful of real-looking items covering hyphenated names and multi-digit ids.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("1", "bulbasaur"),
        Item::new("2", "ivysaur"),
        Item::new("3", "venusaur"),
        Item::new("4", "charmander"),
        Item::new("25", "pikachu"),
        Item::new("122", "mr-mime"),
    ]
}

/// `n` entries named `creature-1` .. `creature-n` with matching URL ids.
pub fn numbered_entries(n: usize) -> Vec<CatalogEntry> {
    (1..=n)
        .map(|i| {
            CatalogEntry::new(
                format!("creature-{i}"),
                format!("https://pokeapi.co/api/v2/pokemon/{i}/"),
            )
        })
        .collect()
}

pub fn numbered_catalog(n: usize) -> crate::core::item::Catalog {
    crate::core::item::Catalog::from_entries(numbered_entries(n))
}

/// Creates a test App with a fixed session id and `n` numbered items loaded.
pub fn test_app_with_items(n: usize) -> App {
    let navigation = NavigationStore::with_session_id(Box::new(MemoryStore::new()), "test".to_string());
    let mut app = App::with_navigation("test", navigation);
    update(&mut app, Action::CatalogLoaded(numbered_entries(n)));
    app
}

/// A source serving a fixed catalog; details are synthesized from the id.
pub struct StaticSource {
    pub entries: Vec<CatalogEntry>,
}

#[async_trait]
impl CatalogSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, SourceError> {
        Ok(self.entries.clone())
    }

    async fn fetch_detail(&self, id: &str) -> Result<CreatureDetail, SourceError> {
        let numeric: u32 = id
            .parse()
            .map_err(|_| SourceError::NotFound(id.to_string()))?;
        Ok(CreatureDetail {
            id: numeric,
            name: format!("creature-{id}"),
            ..Default::default()
        })
    }
}
