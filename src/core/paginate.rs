//! # Paginator
//!
//! Slices the filtered view into fixed-size pages and computes which page
//! links to show.
//!
//! ## Visible page window
//!
//! `visible_pages` produces the familiar `1 … 4 5 6 … 20` layout (zero-based
//! internally). The window around the current page is `delta` pages wide on
//! each side; the first and last page are always present, and a `Gap` stands
//! in for every collapsed range:
//!
//! ```text
//! visible_pages(5, 20, 1)  →  [0, Gap, 4, 5, 6, Gap, 20]
//! visible_pages(0, 3, 1)   →  [0, 1, Gap, 3]
//! visible_pages(2, 3, 1)   →  [0, 1, 2, 3]
//! visible_pages(0, 0, 1)   →  [0]
//! ```
//!
//! A gap is only inserted when it actually hides a page: a window starting at
//! page 1 is joined to page 0 directly.

/// Items shown per page.
pub const PAGE_SIZE: usize = 75;

/// Pages shown on each side of the current page.
pub const WINDOW_DELTA: usize = 1;

/// One entry of the page-link bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A direct link to a zero-based page index.
    Page(usize),
    /// A collapsed range, rendered as a page-jump control.
    Gap,
}

/// Returns the half-open slice `[page * size, page * size + size)` of `items`,
/// clamped to its bounds. Out-of-range pages give an empty slice.
pub fn paginate<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Highest valid page index for `len` items, or `None` when there are no pages.
pub fn max_page_index(len: usize, page_size: usize) -> Option<usize> {
    if len == 0 || page_size == 0 {
        None
    } else {
        Some(len.div_ceil(page_size) - 1)
    }
}

/// Computes the page-link bar for `current` out of `0..=max`.
///
/// `current` beyond `max` is treated as `max`.
pub fn visible_pages(current: usize, max: usize, delta: usize) -> Vec<PageSlot> {
    let current = current.min(max);
    let start = current.saturating_sub(delta);
    let end = current.saturating_add(delta).min(max);

    let mut slots = Vec::with_capacity(end - start + 5);

    if start != 0 {
        slots.push(PageSlot::Page(0));
        if start > 1 {
            slots.push(PageSlot::Gap);
        }
    }

    slots.extend((start..=end).map(PageSlot::Page));

    if end != max {
        if end < max - 1 {
            slots.push(PageSlot::Gap);
        }
        slots.push(PageSlot::Page(max));
    }

    slots
}

/// The current page of a browsing view.
///
/// Invariant: `page_index <= max(max_page_index, 0)` once `clamp` has run
/// against the current view. Every mutator that can move to an invalid page is
/// a no-op instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    pub page_index: usize,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.page_index = 0;
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self, max: Option<usize>) -> bool {
        max.is_some_and(|max| self.page_index < max)
    }

    /// Moves back one page. Returns false when already on the first page.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page_index -= 1;
        true
    }

    /// Moves forward one page. Returns false when already on the last page.
    pub fn next(&mut self, max: Option<usize>) -> bool {
        if !self.has_next(max) {
            return false;
        }
        self.page_index += 1;
        true
    }

    /// Moves to a zero-based page if it exists; otherwise leaves the page as is.
    pub fn go_to(&mut self, requested: usize, max: Option<usize>) -> bool {
        match max {
            Some(max) if requested <= max => {
                self.page_index = requested;
                true
            }
            _ => false,
        }
    }

    /// Page-jump control input: a 1-based page number in `[1, max + 1]`.
    pub fn jump_to_page_number(&mut self, number: usize, max: Option<usize>) -> bool {
        match number.checked_sub(1) {
            Some(requested) => self.go_to(requested, max),
            None => false,
        }
    }

    /// Pulls a stale page index back into range after the view shrank.
    pub fn clamp(&mut self, max: Option<usize>) {
        self.page_index = self.page_index.min(max.unwrap_or(0));
    }
}
