//! Plain bordered list for the tabs without slot rules (skills, spells,
//! proficiencies).

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph};

use crate::core::character::{Skill, Spell};
use crate::tui::component::Component;

pub struct ListPanel {
    pub title: String,
    pub rows: Vec<String>,
    pub empty_text: &'static str,
}

impl ListPanel {
    pub fn new(title: impl Into<String>, rows: Vec<String>, empty_text: &'static str) -> Self {
        Self {
            title: title.into(),
            rows,
            empty_text,
        }
    }

    pub fn skills(skills: &[Skill]) -> Self {
        let rows = skills
            .iter()
            .map(|s| {
                let mark = if s.proficient { "●" } else { "○" };
                format!("{} {} ({:+})", mark, s.name, s.modifier)
            })
            .collect();
        Self::new("Skills", rows, "No skills listed. Press a in edit mode to add one.")
    }

    pub fn spells(spells: &[Spell]) -> Self {
        let rows = spells
            .iter()
            .map(|s| {
                let level = if s.level == 0 {
                    "Cantrip".to_string()
                } else {
                    format!("Level {}", s.level)
                };
                let prepared = if s.prepared { " [prepared]" } else { "" };
                format!("{} - {} {}{}", s.name, level, s.school, prepared)
            })
            .collect();
        Self::new("Spells", rows, "No spells known.")
    }

    pub fn proficiencies(proficiencies: &[String]) -> Self {
        Self::new("Proficiencies", proficiencies.to_vec(), "No proficiencies.")
    }
}

impl Component for ListPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .padding(Padding::horizontal(1));

        if self.rows.is_empty() {
            let empty = Paragraph::new(self.empty_text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self.rows.iter().map(|r| ListItem::new(r.as_str())).collect();
        frame.render_widget(List::new(items).block(block), area);
    }
}
