//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Focus
//!
//! The browse screen has three focus targets cycled with Tab: the search box,
//! the results list and the pager. Typing always goes to the search box.
//! PageUp/PageDown turn pages from anywhere, Ctrl+G opens the page-jump popup.
//! While the popup is open it receives every event.
//!
//! ## Background work
//!
//! Catalog and detail fetches run as tokio tasks and report back through an
//! `mpsc` channel of `Action`s, drained once per loop iteration.

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::catalog::{CatalogSource, build_source};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CardListEvent, CardListState, DetailEvent, DetailViewState, PageJumpEvent, PageJumpState,
    PagerEvent, PagerState, SearchBox, SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which browse control receives keys that aren't typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Results,
    Pager,
}

impl Focus {
    fn next(self, has_pager: bool) -> Self {
        match self {
            Focus::Search => Focus::Results,
            Focus::Results if has_pager => Focus::Pager,
            Focus::Results | Focus::Pager => Focus::Search,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search: SearchBox,
    pub card_list: CardListState,
    pub pager: PagerState,
    pub detail: DetailViewState,
    /// Page-select popup (None = hidden)
    pub page_jump: Option<PageJumpState>,
    pub focus: Focus,
    /// Row opened into the detail screen, reselected on return.
    pub opened_row: Option<usize>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search: SearchBox::new(),
            card_list: CardListState::new(),
            pager: PagerState::new(),
            detail: DetailViewState::new(),
            page_jump: None,
            focus: Focus::Search,
            opened_row: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Everything the loop needs to start background fetches.
struct Runtime {
    source: Option<Arc<dyn CatalogSource>>,
    tx: mpsc::Sender<Action>,
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let (tx, rx) = mpsc::channel();

    let (mut app, source) = match build_source(&config) {
        Ok(source) => {
            spawn_fetch_catalog(source.clone(), tx.clone());
            (App::new(source.name()), Some(source))
        }
        Err(e) => {
            warn!("Could not build catalog source: {}", e);
            let mut app = App::new(config.source.to_string());
            app.is_loading = false;
            app.status_message = format!("Source error: {e}");
            (app, None)
        }
    };
    let runtime = Runtime { source, tx };
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, &runtime, event) {
                should_quit = true;
                break;
            }
        }
        if should_quit {
            break;
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, &runtime, action) {
                should_quit = true;
            }
        }
        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Routes one terminal event. Returns true when the app should quit.
fn handle_event(app: &mut App, tui: &mut TuiState, runtime: &Runtime, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Resize => return false,
        TuiEvent::ForceQuit => return dispatch(app, tui, runtime, Action::Quit),
        _ => {}
    }

    if !app.is_browsing() {
        return match tui.detail.handle_event(&event) {
            Some(DetailEvent::Close) => dispatch(app, tui, runtime, Action::CloseDetail),
            None => false,
        };
    }

    if let Some(jump) = tui.page_jump.as_mut() {
        return match jump.handle_event(&event) {
            Some(PageJumpEvent::Jump(page_number)) => {
                tui.page_jump = None;
                dispatch(app, tui, runtime, Action::JumpToPage(page_number))
            }
            Some(PageJumpEvent::Dismiss) => {
                tui.page_jump = None;
                false
            }
            None => false,
        };
    }

    match event {
        TuiEvent::Escape => return dispatch(app, tui, runtime, Action::Quit),
        TuiEvent::Tab => {
            tui.focus = tui.focus.next(app.view().shows_controls());
            if tui.focus == Focus::Pager {
                tui.pager.focus_current(&app.view());
            }
            return false;
        }
        TuiEvent::PageUp => return dispatch(app, tui, runtime, Action::PreviousPage),
        TuiEvent::PageDown => return dispatch(app, tui, runtime, Action::NextPage),
        TuiEvent::OpenPageJump => {
            open_page_jump(app, tui);
            return false;
        }
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace
            if tui.focus != Focus::Search =>
        {
            tui.focus = Focus::Search;
        }
        _ => {}
    }

    match tui.focus {
        Focus::Search => match event {
            // Arrow keys move the selection while the cursor stays in the box.
            TuiEvent::CursorUp | TuiEvent::CursorDown => {
                let len = app.view().items.len();
                tui.card_list.handle_event(&event, len);
                false
            }
            _ => match tui.search.handle_event(&event) {
                Some(SearchEvent::Changed(term)) => {
                    dispatch(app, tui, runtime, Action::SetSearch(term))
                }
                Some(SearchEvent::Accept) => open_selected(app, tui, runtime),
                None => false,
            },
        },
        Focus::Results => {
            let len = app.view().items.len();
            match tui.card_list.handle_event(&event, len) {
                Some(CardListEvent::Open(index)) => open_item(app, tui, runtime, index),
                None => false,
            }
        }
        Focus::Pager => {
            let pager_event = tui.pager.handle_event(&event, &app.view());
            match pager_event {
                Some(PagerEvent::Previous) => dispatch(app, tui, runtime, Action::PreviousPage),
                Some(PagerEvent::Next) => dispatch(app, tui, runtime, Action::NextPage),
                Some(PagerEvent::GoTo(page_index)) => {
                    dispatch(app, tui, runtime, Action::GoToPage(page_index))
                }
                Some(PagerEvent::OpenJump) => {
                    open_page_jump(app, tui);
                    false
                }
                None => false,
            }
        }
    }
}

fn open_page_jump(app: &App, tui: &mut TuiState) {
    let view = app.view();
    if let Some(max) = view.max_page_index.filter(|_| view.shows_controls()) {
        tui.page_jump = Some(PageJumpState::new(view.page_index + 1, max + 1));
    }
}

fn open_selected(app: &mut App, tui: &mut TuiState, runtime: &Runtime) -> bool {
    let index = tui.card_list.selected().unwrap_or(0);
    open_item(app, tui, runtime, index)
}

fn open_item(app: &mut App, tui: &mut TuiState, runtime: &Runtime, index: usize) -> bool {
    let id = match app.view().items.get(index) {
        Some(item) => item.id.clone(),
        None => return false,
    };
    let scroll_offset = tui.card_list.offset();
    tui.opened_row = Some(index);
    dispatch(app, tui, runtime, Action::OpenDetail { id, scroll_offset })
}

/// Runs an action through `update` and carries out its effect.
/// Returns true when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, runtime: &Runtime, action: Action) -> bool {
    let selected = match action {
        Action::CloseDetail => tui.opened_row.take(),
        _ => None,
    };
    let effect = update(app, action);

    // Remounting the browse view may reset the term.
    if app.search_term.is_empty() {
        tui.search.clear();
    } else if tui.search.buffer != app.search_term {
        tui.search.set_text(&app.search_term);
    }

    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::ScrollTo(offset) => {
            let view = app.view();
            tui.card_list.scroll_to(offset, selected, view.items.len());
            tui.pager.focus_current(&view);
            false
        }
        Effect::FetchDetail(id) => {
            tui.detail.reset();
            match &runtime.source {
                Some(source) => spawn_fetch_detail(source.clone(), id, runtime.tx.clone()),
                None => warn!("No catalog source to fetch detail {}", id),
            }
            false
        }
    }
}

fn spawn_fetch_catalog(source: Arc<dyn CatalogSource>, tx: mpsc::Sender<Action>) {
    info!("Fetching catalog from {}", source.name());
    tokio::spawn(async move {
        let action = match source.fetch_catalog().await {
            Ok(entries) => Action::CatalogLoaded(entries),
            Err(e) => Action::CatalogFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send catalog result: receiver dropped");
        }
    });
}

fn spawn_fetch_detail(source: Arc<dyn CatalogSource>, id: String, tx: mpsc::Sender<Action>) {
    info!("Fetching detail {} from {}", id, source.name());
    tokio::spawn(async move {
        let action = match source.fetch_detail(&id).await {
            Ok(detail) => Action::DetailLoaded {
                id,
                detail: Box::new(detail),
            },
            Err(error) => Action::DetailFailed { id, error },
        };
        if tx.send(action).is_err() {
            warn!("Failed to send detail result: receiver dropped");
        }
    });
}
