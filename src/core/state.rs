//! # Application State
//!
//! Core browsing state for Menagerie. Domain logic only, no TUI types.
//! Presentation state (list selection, focused control) lives in `tui`.
//!
//! ```text
//! App
//! ├── source_name: String          // label of the catalog source
//! ├── catalog: Catalog             // empty until CatalogLoaded
//! ├── search_term: String          // current filter text
//! ├── page: PageState              // current page of the filtered view
//! ├── navigation: NavigationStore  // read-once page/scroll snapshot
//! ├── screen: Screen               // Browse or Detail
//! ├── status_message: String       // status bar text
//! └── is_loading: bool             // catalog fetch in flight
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::catalog::types::CreatureDetail;
use crate::core::filter::filter;
use crate::core::item::Catalog;
use crate::core::nav_state::NavigationStore;
use crate::core::paginate::{max_page_index, PageState, PAGE_SIZE};
use crate::core::view::{render_page, PageView};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Box<CreatureDetail>),
    NotFound,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Browse,
    Detail { id: String, detail: DetailState },
}

pub struct App {
    pub source_name: String,
    pub catalog: Catalog,
    pub search_term: String,
    pub page: PageState,
    pub navigation: NavigationStore,
    pub screen: Screen,
    pub status_message: String,
    pub is_loading: bool,
}

impl App {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self::with_navigation(source_name, NavigationStore::default())
    }

    pub fn with_navigation(source_name: impl Into<String>, navigation: NavigationStore) -> Self {
        Self {
            source_name: source_name.into(),
            catalog: Catalog::default(),
            search_term: String::new(),
            page: PageState::new(),
            navigation,
            screen: Screen::Browse,
            status_message: String::from("Loading catalog..."),
            is_loading: true,
        }
    }

    /// The browse view for the current term and page.
    pub fn view(&self) -> PageView<'_> {
        render_page(&self.catalog, &self.search_term, self.page.page_index)
    }

    pub fn max_page_index(&self) -> Option<usize> {
        let matches = filter(self.catalog.items(), &self.search_term);
        max_page_index(matches.len(), PAGE_SIZE)
    }

    pub fn is_browsing(&self) -> bool {
        matches!(self.screen, Screen::Browse)
    }

    /// The browse view appearing: search and page start fresh, then any saved
    /// snapshot is consumed. Returns the scroll offset to restore, if any.
    pub fn mount(&mut self) -> Option<usize> {
        self.search_term.clear();
        self.page.reset();

        let snapshot = self.navigation.take_snapshot()?;
        self.page.page_index = snapshot.page_index;
        self.page.clamp(self.max_page_index());
        Some(snapshot.scroll_offset)
    }

    /// The id of the detail screen currently open, if any.
    pub fn detail_id(&self) -> Option<&str> {
        match &self.screen {
            Screen::Detail { id, .. } => Some(id),
            Screen::Browse => None,
        }
    }
}
