//! # StatusBar Component
//!
//! Two single-line rows at the bottom of the screen: the session's status
//! message, and a key help line that depends on the current mode.
//!
//! Stateless: it receives both strings as props and renders them as plain
//! spans, no borders.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct StatusBar<'a> {
    pub status_message: &'a str,
    pub help: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(status_message: &'a str, help: &'a str) -> Self {
        Self {
            status_message,
            help,
        }
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [status_area, help_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        frame.render_widget(
            Span::styled(self.status_message, Style::default().fg(Color::Green)),
            status_area,
        );
        frame.render_widget(
            Span::styled(self.help, Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_status_bar_renders_both_rows() {
        let backend = TestBackend::new(60, 2);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut status_bar = StatusBar::new("Character saved successfully!", "q Quit");
        terminal.draw(|f| status_bar.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].symbol(), "C");
        assert_eq!(buffer[(0, 1)].symbol(), "q");
        assert!(buffer_text(&terminal).contains("saved successfully"));
    }

    #[test]
    fn test_status_bar_empty_message() {
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut status_bar = StatusBar::new("", "");
        terminal.draw(|f| status_bar.render(f, f.area())).unwrap();

        assert!(buffer_text(&terminal).trim().is_empty());
    }
}
