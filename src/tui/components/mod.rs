//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top bar with source, match count and status
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: the search field, owns its text buffer
//! - `CardList` / `CardListState`: the rows of the current page
//! - `Pager` / `PagerState`: previous, page links, gaps, next
//! - `PageJump` / `PageJumpState`: the "Page Select" popup
//! - `DetailView` / `DetailViewState`: one item's full record
//!
//! Stateful components split into a persistent `*State` kept in `TuiState`
//! and a transient wrapper built each frame from borrowed state and props.
//! Components never read `App` directly; the caller passes what they show.
//!
//! ```rust,ignore
//! CardList::new(&mut tui.card_list, &view.items, &app.search_term, app.is_loading, focused)
//!     .render(frame, list_area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (top bar)
//! ├── search_box.rs   (search field)
//! ├── card_list.rs    (page rows with match highlighting)
//! ├── pager.rs        (page controls)
//! ├── page_jump.rs    (page-select popup)
//! └── detail_view.rs  (detail screen)
//! ```

pub mod card_list;
pub mod detail_view;
pub mod page_jump;
pub mod pager;
pub mod search_box;
mod title_bar;

pub use card_list::{CardList, CardListEvent, CardListState};
pub use detail_view::{DetailEvent, DetailView, DetailViewState};
pub use page_jump::{PageJump, PageJumpEvent, PageJumpState};
pub use pager::{Pager, PagerEvent, PagerState};
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;
