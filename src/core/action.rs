//! # Actions
//!
//! Everything that can happen in Menagerie becomes an `Action`.
//! User types in the search box? That's `Action::SetSearch(term)`.
//! Catalog source answers? That's `Action::CatalogLoaded(entries)`.
//!
//! `update()` applies an action to the state and returns an `Effect`: a
//! request for the adapter to do something outside the core (fetch a detail
//! record, scroll the list, quit). No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::catalog::source::SourceError;
use crate::catalog::types::{CatalogEntry, CreatureDetail};
use crate::core::item::Catalog;
use crate::core::state::{App, DetailState, Screen};

#[derive(Debug)]
pub enum Action {
    CatalogLoaded(Vec<CatalogEntry>),
    CatalogFailed(String),
    SetSearch(String),
    PreviousPage,
    NextPage,
    /// Direct page link, zero-based.
    GoToPage(usize),
    /// Page-jump input, one-based.
    JumpToPage(usize),
    OpenDetail {
        id: String,
        scroll_offset: usize,
    },
    DetailLoaded {
        id: String,
        detail: Box<CreatureDetail>,
    },
    DetailFailed {
        id: String,
        error: SourceError,
    },
    CloseDetail,
    Quit,
}

/// Work the adapter must carry out after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    FetchDetail(String),
    /// Scroll the browse list so this row offset is at the top.
    ScrollTo(usize),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::CatalogLoaded(entries) => {
            app.catalog = Catalog::from_entries(entries);
            app.is_loading = false;
            app.status_message = format!(
                "{} entries from {}",
                app.catalog.len(),
                app.source_name
            );
            info!("Catalog loaded: {} entries", app.catalog.len());
            mount(app)
        }
        Action::CatalogFailed(message) => {
            app.is_loading = false;
            app.status_message = format!("Failed to load catalog: {message}");
            warn!("Catalog load failed: {}", message);
            Effect::None
        }
        Action::SetSearch(term) => {
            debug!("Search term: {:?}", term);
            app.search_term = term;
            app.page.reset();
            Effect::ScrollTo(0)
        }
        Action::PreviousPage => page_moved(app.page.previous()),
        Action::NextPage => {
            let max = app.max_page_index();
            page_moved(app.page.next(max))
        }
        Action::GoToPage(index) => {
            let max = app.max_page_index();
            page_moved(app.page.go_to(index, max))
        }
        Action::JumpToPage(number) => {
            let max = app.max_page_index();
            page_moved(app.page.jump_to_page_number(number, max))
        }
        Action::OpenDetail { id, scroll_offset } => {
            app.navigation.save(app.page.page_index, scroll_offset);
            info!("Opening detail for id {}", id);
            app.screen = Screen::Detail {
                id: id.clone(),
                detail: DetailState::Loading,
            };
            Effect::FetchDetail(id)
        }
        Action::DetailLoaded { id, detail } => {
            match &mut app.screen {
                Screen::Detail {
                    id: current,
                    detail: state,
                } if *current == id => *state = DetailState::Loaded(detail),
                _ => debug!("Dropping stale detail for id {}", id),
            }
            Effect::None
        }
        Action::DetailFailed { id, error } => {
            match &mut app.screen {
                Screen::Detail {
                    id: current,
                    detail: state,
                } if *current == id => {
                    warn!("Detail fetch for id {} failed: {}", id, error);
                    *state = match error {
                        SourceError::NotFound(_) => DetailState::NotFound,
                        other => DetailState::Failed(other.to_string()),
                    };
                }
                _ => debug!("Dropping stale detail error for id {}", id),
            }
            Effect::None
        }
        Action::CloseDetail => {
            if app.is_browsing() {
                return Effect::None;
            }
            app.screen = Screen::Browse;
            mount(app)
        }
        Action::Quit => Effect::Quit,
    }
}

fn mount(app: &mut App) -> Effect {
    match app.mount() {
        Some(offset) => {
            debug!(
                "Restored page {} and scroll offset {}",
                app.page.page_index, offset
            );
            Effect::ScrollTo(offset)
        }
        None => Effect::None,
    }
}

fn page_moved(moved: bool) -> Effect {
    if moved {
        Effect::ScrollTo(0)
    } else {
        Effect::None
    }
}
