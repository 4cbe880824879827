//! # Card List Component
//!
//! The items of the current page, one row each, with the parts matching the
//! search term highlighted.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CardListState` lives in `TuiState` (selection and scroll offset)
//! - `CardList` is created each frame with borrowed state and props
//!
//! The scroll offset is the index of the first visible row. It is what gets
//! saved before opening a detail view and restored on return.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::core::filter::highlight;
use crate::core::item::Item;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

pub const EMPTY_MESSAGE: &str = "No monsters found matching your search";

const MATCH_STYLE: Style = Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD);

/// Persistent state for the card list.
#[derive(Debug, Default)]
pub struct CardListState {
    pub list_state: ListState,
}

/// Events emitted by the card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardListEvent {
    /// Open the item at this index of the current page.
    Open(usize),
}

impl CardListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// First visible row.
    pub fn offset(&self) -> usize {
        self.list_state.offset()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Puts row `offset` at the top. `len` is the number of rows on the page;
    /// offsets past the end are pulled back to the last row.
    ///
    /// `selected` is kept when it is on the page at or below the top row,
    /// otherwise the top row is selected.
    pub fn scroll_to(&mut self, offset: usize, selected: Option<usize>, len: usize) {
        if len == 0 {
            *self.list_state.offset_mut() = 0;
            self.list_state.select(None);
            return;
        }
        let offset = offset.min(len - 1);
        let selected = selected
            .filter(|row| *row >= offset && *row < len)
            .unwrap_or(offset);
        *self.list_state.offset_mut() = offset;
        self.list_state.select(Some(selected));
    }

    /// Handle a key event for a page of `len` rows.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> Option<CardListEvent> {
        if len == 0 {
            return None;
        }
        let current = self.selected().unwrap_or(0).min(len - 1);
        match event {
            TuiEvent::CursorUp => {
                self.list_state.select(Some(current.saturating_sub(1)));
                None
            }
            TuiEvent::CursorDown => {
                self.list_state.select(Some((current + 1).min(len - 1)));
                None
            }
            TuiEvent::Home => {
                self.list_state.select(Some(0));
                None
            }
            TuiEvent::End => {
                self.list_state.select(Some(len - 1));
                None
            }
            TuiEvent::Submit => Some(CardListEvent::Open(current)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the card list.
pub struct CardList<'a> {
    state: &'a mut CardListState,
    items: &'a [&'a Item],
    term: &'a str,
    is_loading: bool,
    focused: bool,
}

impl<'a> CardList<'a> {
    pub fn new(
        state: &'a mut CardListState,
        items: &'a [&'a Item],
        term: &'a str,
        is_loading: bool,
        focused: bool,
    ) -> Self {
        Self {
            state,
            items,
            term,
            is_loading,
            focused,
        }
    }
}

/// Builds the row for one item: `#025  Pikachu`, match runs highlighted.
pub fn card_line<'a>(item: &Item, term: &str) -> Line<'a> {
    let mut spans = vec![Span::styled("#", Style::default().fg(Color::DarkGray))];
    let padding = 3usize.saturating_sub(item.id.chars().count());
    if padding > 0 {
        spans.push(Span::raw("0".repeat(padding)));
    }
    spans.extend(highlighted_spans(&item.id, term));
    spans.push(Span::raw("  "));
    spans.extend(highlighted_spans(&item.display_name(), term));
    Line::from(spans)
}

fn highlighted_spans<'a>(text: &str, term: &str) -> Vec<Span<'a>> {
    highlight(text, term)
        .into_iter()
        .map(|segment| {
            if segment.is_match {
                Span::styled(segment.text.to_string(), MATCH_STYLE)
            } else {
                Span::raw(segment.text.to_string())
            }
        })
        .collect()
}

impl Component for CardList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(" Results ")
            .title_bottom(Line::from(" Enter Open  Tab Pager  Ctrl+G Jump  Esc Quit ").centered());

        if self.is_loading || self.items.is_empty() {
            let message = if self.is_loading {
                "Loading catalog..."
            } else {
                EMPTY_MESSAGE
            };
            let paragraph = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(card_line(item, self.term)))
            .collect();

        let list = List::new(rows)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▸ ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_items;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_text(items: &[&Item], term: &str, is_loading: bool) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = CardListState::new();
        terminal
            .draw(|f| {
                CardList::new(&mut state, items, term, is_loading, true).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_card_line_highlights_matches() {
        let item = Item::new("122", "mr-mime");
        let line = card_line(&item, "mime");
        let highlighted: Vec<String> = line
            .spans
            .iter()
            .filter(|s| s.style == MATCH_STYLE)
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(highlighted, vec!["Mime"]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "#122  Mr Mime");
    }

    #[test]
    fn test_card_line_pads_short_ids() {
        let item = Item::new("25", "pikachu");
        let text: String = card_line(&item, "")
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "#025  Pikachu");
    }

    #[test]
    fn test_render_lists_items() {
        let items = sample_items();
        let refs: Vec<&Item> = items.iter().collect();
        let text = render_text(&refs, "", false);
        assert!(text.contains("Bulbasaur"));
        assert!(text.contains("Mr Mime"));
    }

    #[test]
    fn test_render_empty_and_loading_messages() {
        assert!(render_text(&[], "zzz", false).contains(EMPTY_MESSAGE));
        assert!(render_text(&[], "", true).contains("Loading catalog..."));
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let mut state = CardListState::new();
        assert_eq!(state.handle_event(&TuiEvent::CursorUp, 3), None);
        assert_eq!(state.selected(), Some(0));
        state.handle_event(&TuiEvent::CursorDown, 3);
        state.handle_event(&TuiEvent::CursorDown, 3);
        state.handle_event(&TuiEvent::CursorDown, 3);
        assert_eq!(state.selected(), Some(2));
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, 3),
            Some(CardListEvent::Open(2))
        );
        assert_eq!(state.handle_event(&TuiEvent::Submit, 0), None);
    }

    #[test]
    fn test_scroll_to_sets_offset_and_selection() {
        let mut state = CardListState::new();
        state.scroll_to(40, None, 75);
        assert_eq!(state.offset(), 40);
        assert_eq!(state.selected(), Some(40));

        state.scroll_to(200, None, 50);
        assert_eq!(state.offset(), 49);

        state.scroll_to(5, None, 0);
        assert_eq!(state.offset(), 0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_scroll_to_keeps_selected_row() {
        let mut state = CardListState::new();
        state.scroll_to(10, Some(17), 75);
        assert_eq!(state.offset(), 10);
        assert_eq!(state.selected(), Some(17));

        // Rows above the top or past the page fall back to the top row.
        state.scroll_to(10, Some(3), 75);
        assert_eq!(state.selected(), Some(10));
        state.scroll_to(10, Some(80), 75);
        assert_eq!(state.selected(), Some(10));
    }

    #[test]
    fn test_card_line_never_highlights_padding() {
        let item = Item::new("10", "caterpie");
        let highlighted = |term: &str| -> Vec<String> {
            card_line(&item, term)
                .spans
                .iter()
                .filter(|s| s.style == MATCH_STYLE)
                .map(|s| s.content.to_string())
                .collect()
        };
        assert!(highlighted("01").is_empty());
        assert_eq!(highlighted("0"), vec!["0"]);
        assert_eq!(highlighted("10"), vec!["10"]);

        let text: String = card_line(&item, "0")
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "#010  Caterpie");
    }
}
