//! # Page Jump Popup
//!
//! Small overlay for going straight to a page number. Opened from a gap in
//! the pager or with Ctrl+G.
//!
//! The field starts with the current page number (1-based). Only digits are
//! accepted. Enter emits the typed number if it is in `1..=last_page`;
//! otherwise the popup stays open and flags the input as out of range.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::event::TuiEvent;

const MAX_DIGITS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageJumpEvent {
    /// A valid 1-based page number.
    Jump(usize),
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageJumpState {
    pub input: String,
    /// Number of pages in the current view.
    pub last_page: usize,
    pub rejected: bool,
}

impl PageJumpState {
    /// `current_page` is the 1-based page shown when the popup opens.
    pub fn new(current_page: usize, last_page: usize) -> Self {
        Self {
            input: current_page.to_string(),
            last_page,
            rejected: false,
        }
    }

    fn parsed(&self) -> Option<usize> {
        self.input
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=self.last_page).contains(n))
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<PageJumpEvent> {
        match event {
            TuiEvent::Escape => Some(PageJumpEvent::Dismiss),
            TuiEvent::InputChar(c) if c.is_ascii_digit() => {
                if self.input.len() < MAX_DIGITS {
                    self.input.push(*c);
                }
                self.rejected = false;
                None
            }
            TuiEvent::Backspace => {
                self.input.pop();
                self.rejected = false;
                None
            }
            TuiEvent::Submit => match self.parsed() {
                Some(n) => Some(PageJumpEvent::Jump(n)),
                None => {
                    self.rejected = true;
                    None
                }
            },
            _ => None,
        }
    }
}

pub struct PageJump<'a> {
    state: &'a PageJumpState,
}

impl<'a> PageJump<'a> {
    pub fn new(state: &'a PageJumpState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = popup_rect(area, 36, 6);
        frame.render_widget(Clear, popup);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Page Select ")
            .title_bottom(Line::from(" Enter Go  Esc Cancel ").centered());

        let hint = if self.state.rejected {
            Line::styled(
                format!("Enter a page from 1 to {}", self.state.last_page),
                Style::default().fg(Color::Red),
            )
        } else {
            Line::styled(
                "Browse to a specific page.",
                Style::default().fg(Color::DarkGray),
            )
        };
        let lines = vec![
            hint,
            Line::from(""),
            Line::from(format!("Page: {}", self.state.input)),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), popup);

        let cursor_x = popup.x + 1 + "Page: ".len() as u16 + self.state.input.len() as u16;
        frame.set_cursor_position((cursor_x.min(popup.right().saturating_sub(2)), popup.y + 3));
    }
}

fn popup_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(vertical);
    popup
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_defaults_to_current_page() {
        let mut jump = PageJumpState::new(3, 20);
        assert_eq!(jump.input, "3");
        assert_eq!(
            jump.handle_event(&TuiEvent::Submit),
            Some(PageJumpEvent::Jump(3))
        );
    }

    #[test]
    fn test_only_digits_are_accepted() {
        let mut jump = PageJumpState::new(1, 20);
        jump.handle_event(&TuiEvent::Backspace);
        jump.handle_event(&TuiEvent::InputChar('x'));
        jump.handle_event(&TuiEvent::InputChar('1'));
        jump.handle_event(&TuiEvent::InputChar('2'));
        assert_eq!(jump.input, "12");
        assert_eq!(
            jump.handle_event(&TuiEvent::Submit),
            Some(PageJumpEvent::Jump(12))
        );
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut jump = PageJumpState::new(1, 20);
        jump.handle_event(&TuiEvent::InputChar('9'));
        jump.handle_event(&TuiEvent::InputChar('9'));
        assert_eq!(jump.input, "199");
        assert_eq!(jump.handle_event(&TuiEvent::Submit), None);
        assert!(jump.rejected);
        jump.handle_event(&TuiEvent::Backspace);
        assert!(!jump.rejected);

        jump.handle_event(&TuiEvent::Backspace);
        jump.handle_event(&TuiEvent::Backspace);
        jump.handle_event(&TuiEvent::InputChar('0'));
        assert_eq!(jump.input, "0");
        assert_eq!(jump.handle_event(&TuiEvent::Submit), None);
        assert!(jump.rejected);
    }

    #[test]
    fn test_escape_dismisses() {
        let mut jump = PageJumpState::new(1, 2);
        assert_eq!(
            jump.handle_event(&TuiEvent::Escape),
            Some(PageJumpEvent::Dismiss)
        );
    }

    #[test]
    fn test_render_shows_title_and_input() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let jump = PageJumpState::new(4, 20);
        terminal
            .draw(|f| PageJump::new(&jump).render(f, f.area()))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Page Select"));
        assert!(text.contains("Page: 4"));
    }
}
