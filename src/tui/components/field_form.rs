//! # FieldForm Component
//!
//! The text fields owned by the active tab, one per row. In view mode it shows
//! the document's values; in edit mode it shows the staged text, highlights
//! the focused field and places the terminal cursor at its end.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::character::Character;
use crate::core::staging::Staging;
use crate::core::tab::{Field, Tab};
use crate::tui::component::Component;
use crate::tui::components::selected_style;

const LABEL_WIDTH: usize = 14;

pub struct FieldForm<'a> {
    pub tab: Tab,
    pub character: &'a Character,
    pub staging: &'a Staging,
    pub editing: bool,
}

impl<'a> FieldForm<'a> {
    pub fn new(tab: Tab, character: &'a Character, staging: &'a Staging, editing: bool) -> Self {
        Self {
            tab,
            character,
            staging,
            editing,
        }
    }

    fn value(&self, field: Field) -> String {
        if self.editing {
            self.staging.value(field).to_string()
        } else {
            field.read(self.character)
        }
    }
}

impl Component for FieldForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.staging.focused(self.tab).filter(|_| self.editing);

        let lines: Vec<Line> = self
            .tab
            .fields()
            .iter()
            .map(|&field| {
                let label = format!("{:<LABEL_WIDTH$}", format!("{}:", field.label()));
                let value_style = if focused == Some(field) {
                    selected_style()
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(label, Style::default().fg(Color::Cyan)),
                    Span::styled(self.value(field), value_style),
                ])
            })
            .collect();

        let block = Block::bordered()
            .title(format!(" {} ", self.tab.title()))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(lines).block(block), area);

        // Cursor after the focused value
        if let Some(field) = focused
            && let Some(row) = self.tab.fields().iter().position(|&f| f == field)
        {
            let column = LABEL_WIDTH + self.staging.value(field).chars().count();
            let x = inner.x.saturating_add(column as u16);
            let y = inner.y.saturating_add(row as u16);
            if x < inner.right() && y < inner.bottom() {
                frame.set_cursor_position(Position::new(x, y));
            }
        }
    }
}
