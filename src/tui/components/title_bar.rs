//! # TitleBar Component
//!
//! One-line bar at the top: source label, match count, status message.
//!
//! Stateless: all data arrives as props and nothing is kept between frames.
//!
//! ```text
//! Menagerie (source: pokeapi) | 3 of 1302 | Loading catalog...
//! ```

use crate::tui::component::Component;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

pub struct TitleBar {
    pub source_name: String,
    pub status_message: String,
    /// `(matches, total)`; `None` while the catalog isn't loaded.
    pub counts: Option<(usize, usize)>,
}

impl TitleBar {
    pub fn new(source_name: String, status_message: String, counts: Option<(usize, usize)>) -> Self {
        Self {
            source_name,
            status_message,
            counts,
        }
    }

    fn text(&self) -> String {
        let mut parts = vec![format!("Menagerie (source: {})", self.source_name)];
        if let Some((matches, total)) = self.counts {
            parts.push(format!("{matches} of {total}"));
        }
        if !self.status_message.is_empty() {
            parts.push(self.status_message.clone());
        }
        parts.join(" | ")
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(self.text(), Style::default().fg(Color::Magenta)));
        frame.render_widget(line, area);
    }
}
