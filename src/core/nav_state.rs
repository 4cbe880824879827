//! # Navigation State Store
//!
//! Remembers where the user was in the browse view while they look at a
//! detail view, so coming back lands on the same page and scroll position.
//!
//! ## Lifecycle
//!
//! ```text
//! browse ──Enter──▶ save(page, scroll) ──▶ detail
//!                                            │
//! browse ◀── take_snapshot() (read + clear) ◀┘
//! ```
//!
//! - `save` runs once, immediately before leaving for a detail view. Paging and
//!   typing never write here.
//! - `take_snapshot` reads and removes the snapshot in one step. A second call
//!   returns `None`, so a stale position can't resurface on a later visit.
//!
//! The snapshot is stored as two string entries in a `SessionStore`, under the
//! `current-page` and `scroll-position` keys, each namespaced by the browsing
//! session id. The store is injectable; `MemoryStore` lives only as long as the
//! process.

use log::{debug, warn};
use std::collections::HashMap;

pub const PAGE_KEY: &str = "current-page";
pub const SCROLL_KEY: &str = "scroll-position";

/// A string key-value store scoped to one browsing session.
pub trait SessionStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str) -> Option<String>;
}

/// In-process session store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }
}

/// Page and scroll position saved just before opening a detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub page_index: usize,
    /// Rows scrolled within the page's list.
    pub scroll_offset: usize,
}

pub struct NavigationStore {
    store: Box<dyn SessionStore>,
    session_id: String,
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }
}

impl NavigationStore {
    /// Wraps `store` under a fresh browsing-session id.
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self::with_session_id(store, uuid::Uuid::new_v4().to_string())
    }

    pub fn with_session_id(store: Box<dyn SessionStore>, session_id: String) -> Self {
        Self { store, session_id }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    fn key(&self, name: &str) -> String {
        format!("{}/{}", self.session_id, name)
    }

    pub fn save(&mut self, page_index: usize, scroll_offset: usize) {
        let page_key = self.key(PAGE_KEY);
        let scroll_key = self.key(SCROLL_KEY);
        self.store.set(&page_key, page_index.to_string());
        self.store.set(&scroll_key, scroll_offset.to_string());
        debug!(
            "Saved navigation snapshot: page={}, scroll={}",
            page_index, scroll_offset
        );
    }

    /// True if a snapshot is waiting. Does not consume it.
    pub fn has_snapshot(&self) -> bool {
        self.store.get(&self.key(PAGE_KEY)).is_some()
            || self.store.get(&self.key(SCROLL_KEY)).is_some()
    }

    /// Reads and clears the pending snapshot.
    ///
    /// Either half may be missing or unreadable; it then falls back to 0.
    /// Returns `None` only when neither key was present.
    pub fn take_snapshot(&mut self) -> Option<NavigationSnapshot> {
        let page_key = self.key(PAGE_KEY);
        let scroll_key = self.key(SCROLL_KEY);
        let page = self.store.remove(&page_key);
        let scroll = self.store.remove(&scroll_key);

        if page.is_none() && scroll.is_none() {
            return None;
        }

        let snapshot = NavigationSnapshot {
            page_index: parse_entry(PAGE_KEY, page.as_deref()),
            scroll_offset: parse_entry(SCROLL_KEY, scroll.as_deref()),
        };
        debug!("Took navigation snapshot: {:?}", snapshot);
        Some(snapshot)
    }
}

fn parse_entry(key: &str, raw: Option<&str>) -> usize {
    match raw.map(str::parse::<usize>) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            warn!("Ignoring unreadable {} entry {:?}: {}", key, raw, e);
            0
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> NavigationStore {
        NavigationStore::with_session_id(Box::new(MemoryStore::new()), "test".to_string())
    }

    #[test]
    fn test_save_then_take_round_trip() {
        let mut nav = store();
        nav.save(3, 540);
        assert_eq!(
            nav.take_snapshot(),
            Some(NavigationSnapshot {
                page_index: 3,
                scroll_offset: 540
            })
        );
    }

    #[test]
    fn test_take_is_read_once() {
        let mut nav = store();
        nav.save(3, 540);
        assert!(nav.take_snapshot().is_some());
        assert!(nav.take_snapshot().is_none());
        assert!(!nav.has_snapshot());
    }

    #[test]
    fn test_no_snapshot_on_first_visit() {
        let mut nav = store();
        assert!(!nav.has_snapshot());
        assert!(nav.take_snapshot().is_none());
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let mut nav = store();
        nav.save(1, 10);
        nav.save(4, 0);
        assert_eq!(
            nav.take_snapshot(),
            Some(NavigationSnapshot {
                page_index: 4,
                scroll_offset: 0
            })
        );
    }

    #[test]
    fn test_keys_are_namespaced_by_session() {
        let mut backing = MemoryStore::new();
        backing.set("other/current-page", "9".to_string());
        let mut nav = NavigationStore::with_session_id(Box::new(backing), "mine".to_string());
        assert!(nav.take_snapshot().is_none());
        nav.save(2, 7);
        assert_eq!(nav.take_snapshot().map(|s| s.page_index), Some(2));
    }

    #[test]
    fn test_fresh_stores_get_distinct_session_ids() {
        let a = NavigationStore::default();
        let b = NavigationStore::default();
        assert_ne!(a.session_id(), b.session_id());
    }

    #[test]
    fn test_partial_or_garbled_snapshot_falls_back_to_zero() {
        let mut backing = MemoryStore::new();
        backing.set("s/current-page", "not-a-number".to_string());
        backing.set("s/scroll-position", "12".to_string());
        let mut nav = NavigationStore::with_session_id(Box::new(backing), "s".to_string());
        assert_eq!(
            nav.take_snapshot(),
            Some(NavigationSnapshot {
                page_index: 0,
                scroll_offset: 12
            })
        );
    }

    #[test]
    fn test_memory_store_basic_ops() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        store.set("k", "v".to_string());
        assert_eq!(store.get("k").as_deref(), Some("v"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.remove("k").as_deref(), Some("v"));
        assert!(store.get("k").is_none());
    }
}
