//! # Pager Component
//!
//! The page controls under the results: previous arrow, the visible page
//! links, gap markers and the next arrow.
//!
//! ```text
//! ‹  1  …  4 [5] 6  …  20  ›
//! ```
//!
//! Left/Right move a cursor over the controls, Enter activates the one under
//! the cursor. Activating a gap opens the page-jump popup. Disabled arrows
//! are drawn dimmed and do nothing.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::core::paginate::PageSlot;
use crate::core::view::PageView;
use crate::tui::event::TuiEvent;

/// One focusable control of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerControl {
    Previous,
    Page(usize),
    Gap,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerEvent {
    Previous,
    Next,
    GoTo(usize),
    OpenJump,
}

/// Builds the control row for a view: arrows around its page slots.
pub fn controls(view: &PageView<'_>) -> Vec<PagerControl> {
    let mut controls = Vec::with_capacity(view.slots.len() + 2);
    controls.push(PagerControl::Previous);
    controls.extend(view.slots.iter().map(|slot| match slot {
        PageSlot::Page(p) => PagerControl::Page(*p),
        PageSlot::Gap => PagerControl::Gap,
    }));
    controls.push(PagerControl::Next);
    controls
}

/// Persistent pager state: which control has the cursor.
#[derive(Debug, Default)]
pub struct PagerState {
    pub cursor: usize,
}

impl PagerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts the cursor on the current page's link.
    pub fn focus_current(&mut self, view: &PageView<'_>) {
        self.cursor = controls(view)
            .iter()
            .position(|c| *c == PagerControl::Page(view.page_index))
            .unwrap_or(0);
    }

    pub fn handle_event(&mut self, event: &TuiEvent, view: &PageView<'_>) -> Option<PagerEvent> {
        let controls = controls(view);
        self.cursor = self.cursor.min(controls.len() - 1);
        match event {
            TuiEvent::CursorLeft => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = (self.cursor + 1).min(controls.len() - 1);
                None
            }
            TuiEvent::Submit => match controls[self.cursor] {
                PagerControl::Previous if view.has_previous() => Some(PagerEvent::Previous),
                PagerControl::Next if view.has_next() => Some(PagerEvent::Next),
                PagerControl::Page(p) => Some(PagerEvent::GoTo(p)),
                PagerControl::Gap => Some(PagerEvent::OpenJump),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Transient render wrapper for the pager.
pub struct Pager<'a> {
    state: &'a PagerState,
    view: &'a PageView<'a>,
    focused: bool,
}

impl<'a> Pager<'a> {
    pub fn new(state: &'a PagerState, view: &'a PageView<'a>, focused: bool) -> Self {
        Self {
            state,
            view,
            focused,
        }
    }

    pub fn line(&self) -> Line<'static> {
        let controls = controls(self.view);
        let mut spans = Vec::with_capacity(controls.len() * 2);
        for (i, control) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let (label, enabled, current) = match control {
                PagerControl::Previous => ("‹".to_string(), self.view.has_previous(), false),
                PagerControl::Next => ("›".to_string(), self.view.has_next(), false),
                PagerControl::Gap => ("…".to_string(), true, false),
                PagerControl::Page(p) => (
                    format!("{}", p + 1),
                    true,
                    *p == self.view.page_index,
                ),
            };
            let mut style = if !enabled {
                Style::default().fg(Color::DarkGray)
            } else if current {
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if self.focused && i == self.state.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let label = if current { format!("[{label}]") } else { format!(" {label} ") };
            spans.push(Span::styled(label, style));
        }
        Line::from(spans).centered()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::render_page;
    use crate::test_support::numbered_catalog;

    #[test]
    fn test_controls_wrap_slots_with_arrows() {
        let catalog = numbered_catalog(75 * 21);
        let view = render_page(&catalog, "", 5);
        assert_eq!(
            controls(&view),
            vec![
                PagerControl::Previous,
                PagerControl::Page(0),
                PagerControl::Gap,
                PagerControl::Page(4),
                PagerControl::Page(5),
                PagerControl::Page(6),
                PagerControl::Gap,
                PagerControl::Page(20),
                PagerControl::Next,
            ]
        );
    }

    #[test]
    fn test_focus_current_and_activate() {
        let catalog = numbered_catalog(75 * 21);
        let view = render_page(&catalog, "", 5);
        let mut pager = PagerState::new();
        pager.focus_current(&view);
        assert_eq!(pager.cursor, 4);
        pager.handle_event(&TuiEvent::CursorRight, &view);
        assert_eq!(
            pager.handle_event(&TuiEvent::Submit, &view),
            Some(PagerEvent::GoTo(6))
        );
        pager.handle_event(&TuiEvent::CursorRight, &view);
        assert_eq!(
            pager.handle_event(&TuiEvent::Submit, &view),
            Some(PagerEvent::OpenJump)
        );
    }

    #[test]
    fn test_disabled_previous_does_nothing() {
        let catalog = numbered_catalog(200);
        let view = render_page(&catalog, "", 0);
        let mut pager = PagerState::new();
        assert_eq!(pager.handle_event(&TuiEvent::Submit, &view), None);
        for _ in 0..10 {
            pager.handle_event(&TuiEvent::CursorRight, &view);
        }
        assert_eq!(
            pager.handle_event(&TuiEvent::Submit, &view),
            Some(PagerEvent::Next)
        );
    }

    #[test]
    fn test_line_marks_current_page() {
        let catalog = numbered_catalog(200);
        let view = render_page(&catalog, "", 1);
        let state = PagerState::new();
        let text: String = Pager::new(&state, &view, false)
            .line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("[2]"));
        assert!(text.contains(" 1 "));
        assert!(text.contains(" 3 "));
    }
}
