//! # Page View
//!
//! The pure render pipeline for the browse screen:
//!
//! ```text
//! catalog ──filter(term)──▶ matches ──paginate(page)──▶ items on page
//!                              │
//!                              └──max_page_index──▶ visible_pages ──▶ slots
//! ```
//!
//! Nothing here is cached. The view is recomputed from `(catalog, term, page)`
//! every time it is asked for, so the result depends only on those inputs.

use crate::core::filter::filter;
use crate::core::item::{Catalog, Item};
use crate::core::paginate::{
    max_page_index, paginate, visible_pages, PageSlot, PAGE_SIZE, WINDOW_DELTA,
};

/// Everything the browse screen shows for one `(term, page)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub items: Vec<&'a Item>,
    pub total_matches: usize,
    pub page_index: usize,
    /// `None` when nothing matches.
    pub max_page_index: Option<usize>,
    /// Page-link bar. Empty when nothing matches.
    pub slots: Vec<PageSlot>,
}

impl PageView<'_> {
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.max_page_index.is_some_and(|max| self.page_index < max)
    }

    /// Page controls only appear when there is more than one page.
    pub fn shows_controls(&self) -> bool {
        self.max_page_index.is_some_and(|max| max > 0)
    }
}

/// Builds the view of `page_index` for the catalog filtered by `term`.
pub fn render_page<'a>(catalog: &'a Catalog, term: &str, page_index: usize) -> PageView<'a> {
    let matches = filter(catalog.items(), term);
    let max = max_page_index(matches.len(), PAGE_SIZE);
    let items = paginate(&matches, page_index, PAGE_SIZE).to_vec();
    let slots = match max {
        Some(max) => visible_pages(page_index, max, WINDOW_DELTA),
        None => Vec::new(),
    };

    PageView {
        items,
        total_matches: matches.len(),
        page_index,
        max_page_index: max,
        slots,
    }
}

/// One-line text rendering of the page controls, e.g. `‹ 1 … 4 [5] 6 … 20 ›`.
///
/// Page numbers are shown 1-based. Disabled arrows are left out.
pub fn describe_slots(view: &PageView<'_>) -> String {
    let mut parts = Vec::with_capacity(view.slots.len() + 2);
    if view.has_previous() {
        parts.push("‹".to_string());
    }
    for slot in &view.slots {
        parts.push(match slot {
            PageSlot::Page(p) if *p == view.page_index => format!("[{}]", p + 1),
            PageSlot::Page(p) => (p + 1).to_string(),
            PageSlot::Gap => "…".to_string(),
        });
    }
    if view.has_next() {
        parts.push("›".to_string());
    }
    parts.join(" ")
}
