//! # TabBar Component
//!
//! Strip of the nine sheet tabs, with the active one highlighted and the
//! current mode in the block title:
//!
//! ```text
//! ┌ D&D Character Editor [VIEW] ─────────────────────────────┐
//! │ 1 Basic Info │ 2 Abilities │ 3 Skills │ 4 Equipment │ …  │
//! └──────────────────────────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Tabs};

use crate::core::state::Mode;
use crate::core::tab::Tab;
use crate::tui::component::Component;

pub struct TabBar {
    pub active: Tab,
    pub mode: Mode,
}

impl TabBar {
    pub fn new(active: Tab, mode: Mode) -> Self {
        Self { active, mode }
    }

    fn title(&self) -> String {
        let mode = match self.mode {
            Mode::View => "VIEW",
            Mode::Edit => "EDIT",
        };
        format!(" D&D Character Editor [{}] ", mode)
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = Tab::ALL
            .iter()
            .map(|tab| Line::from(format!("{} {}", tab.index() + 1, tab.title())))
            .collect();

        let border_color = match self.mode {
            Mode::View => Color::DarkGray,
            Mode::Edit => Color::Yellow,
        };

        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .block(
                Block::bordered()
                    .title(self.title())
                    .border_style(Style::default().fg(border_color)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}
