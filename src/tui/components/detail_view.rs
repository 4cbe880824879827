//! # Detail View Component
//!
//! Full-screen record for one item, scrollable with the arrow keys and
//! PageUp/PageDown. Esc or Backspace goes back to the browse view.
//!
//! Content is laid out once per frame as plain lines, wrapped with
//! `textwrap` to the viewport width, then drawn inside a `ScrollView` whose
//! height is the line count.

use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use ratatui::Frame;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::catalog::types::{CreatureDetail, STAT_ORDER};
use crate::core::item::display_name;
use crate::core::state::DetailState;
use crate::tui::event::TuiEvent;

const LABEL: Style = Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD);
const MUTED: Style = Style::new().fg(Color::DarkGray);
/// Stat bars are scaled against this value.
const STAT_BAR_MAX: u32 = 255;
const STAT_BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    Close,
}

/// Persistent scroll state for the detail view.
#[derive(Debug, Default)]
pub struct DetailViewState {
    pub scroll: ScrollViewState,
}

impl DetailViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.scroll = ScrollViewState::default();
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Backspace => Some(DetailEvent::Close),
            TuiEvent::CursorUp => {
                self.scroll.scroll_up();
                None
            }
            TuiEvent::CursorDown => {
                self.scroll.scroll_down();
                None
            }
            TuiEvent::PageUp => {
                self.scroll.scroll_page_up();
                None
            }
            TuiEvent::PageDown => {
                self.scroll.scroll_page_down();
                None
            }
            TuiEvent::Home => {
                self.scroll.scroll_to_top();
                None
            }
            TuiEvent::End => {
                self.scroll.scroll_to_bottom();
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the detail view.
pub struct DetailView<'a> {
    state: &'a mut DetailViewState,
    id: &'a str,
    /// Catalog name for the title while the record is loading.
    name: Option<&'a str>,
    detail: &'a DetailState,
}

impl<'a> DetailView<'a> {
    pub fn new(
        state: &'a mut DetailViewState,
        id: &'a str,
        name: Option<&'a str>,
        detail: &'a DetailState,
    ) -> Self {
        Self {
            state,
            id,
            name,
            detail,
        }
    }

    fn title(&self) -> String {
        let name = match self.detail {
            DetailState::Loaded(detail) if !detail.name.is_empty() => display_name(&detail.name),
            _ => self.name.map(display_name).unwrap_or_default(),
        };
        format!(" #{:0>3} {} ", self.id, name)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .title(self.title())
            .title_bottom(Line::from(" Esc Back  ↑↓ Scroll ").centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content_width = inner.width.saturating_sub(1);
        let lines = match self.detail {
            DetailState::Loading => vec![Line::styled("Loading...", MUTED)],
            DetailState::NotFound => vec![Line::styled(
                format!("No entry found for #{}", self.id),
                MUTED,
            )],
            DetailState::Failed(message) => vec![
                Line::styled("Could not load this entry.", Style::default().fg(Color::Red)),
                Line::from(""),
                Line::styled(message.clone(), MUTED),
            ],
            DetailState::Loaded(detail) => detail_lines(detail, content_width as usize),
        };

        let height = lines.len() as u16;
        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, 0, content_width, height),
        );
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll);
    }
}

/// Lays out a detail record as display lines for the given width.
pub fn detail_lines(detail: &CreatureDetail, width: usize) -> Vec<Line<'static>> {
    let width = width.max(10);
    let mut lines = Vec::new();

    let types: Vec<String> = detail
        .types
        .iter()
        .map(|t| display_name(&t.kind.name))
        .collect();
    if !types.is_empty() {
        lines.push(Line::styled(types.join(" / "), LABEL));
        lines.push(Line::from(""));
    }

    lines.push(field("ID", detail.id.to_string()));
    lines.push(field(
        "Base Experience",
        detail
            .base_experience
            .map(|xp| xp.to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
    ));
    lines.push(field("Height", format!("{:.1} m", detail.height_m())));
    lines.push(field("Weight", format!("{:.1} kg", detail.weight_kg())));
    lines.push(field("Species", display_name(&detail.species.name)));

    section(&mut lines, "Stats");
    for name in STAT_ORDER {
        let value = detail.stat(name).unwrap_or(0);
        let filled = (value.min(STAT_BAR_MAX) as usize * STAT_BAR_WIDTH) / STAT_BAR_MAX as usize;
        lines.push(Line::from(vec![
            Span::raw(format!("{:<15} {:>3} ", display_name(name), value)),
            Span::styled("█".repeat(filled), Style::default().fg(Color::Magenta)),
            Span::styled("░".repeat(STAT_BAR_WIDTH - filled), MUTED),
        ]));
    }

    section(&mut lines, "Abilities");
    let abilities: Vec<String> = detail
        .visible_abilities()
        .into_iter()
        .map(display_name)
        .collect();
    wrapped_list(&mut lines, &abilities, width);
    if let Some(hidden) = detail.hidden_ability() {
        lines.push(field("Hidden", display_name(hidden)));
    }

    section(&mut lines, &format!("Moves ({})", detail.moves.len()));
    let moves: Vec<String> = detail
        .moves
        .iter()
        .map(|m| display_name(&m.entry.name))
        .collect();
    wrapped_list(&mut lines, &moves, width);

    section(&mut lines, "Held Items");
    let items: Vec<String> = detail
        .held_items
        .iter()
        .map(|h| display_name(&h.item.name))
        .collect();
    wrapped_list(&mut lines, &items, width);

    section(&mut lines, "Game Appearances");
    let games: Vec<String> = detail
        .game_indices
        .iter()
        .map(|g| display_name(&g.version.name))
        .collect();
    wrapped_list(&mut lines, &games, width);

    section(&mut lines, "Forms");
    if detail.forms.len() <= 1 {
        lines.push(Line::styled("Default only", MUTED));
    } else {
        let forms: Vec<String> = detail.forms.iter().map(|f| display_name(&f.name)).collect();
        wrapped_list(&mut lines, &forms, width);
    }

    section(&mut lines, "Sprites");
    match detail.artwork_url() {
        Some(url) => lines.push(field("Artwork", url.to_string())),
        None => lines.push(Line::styled("No artwork", MUTED)),
    }
    for url in detail.sprite_urls() {
        lines.push(Line::styled(url.to_string(), MUTED));
    }

    lines
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), LABEL),
        Span::raw(value),
    ])
}

fn section(lines: &mut Vec<Line<'static>>, title: &str) {
    lines.push(Line::from(""));
    lines.push(Line::styled(title.to_string(), LABEL.add_modifier(Modifier::UNDERLINED)));
}

fn wrapped_list(lines: &mut Vec<Line<'static>>, entries: &[String], width: usize) {
    if entries.is_empty() {
        lines.push(Line::styled("None", MUTED));
        return;
    }
    let joined = entries.join(", ");
    let options = textwrap::Options::new(width).break_words(true);
    lines.extend(
        textwrap::wrap(&joined, options)
            .into_iter()
            .map(|line| Line::from(line.into_owned())),
    );
}
