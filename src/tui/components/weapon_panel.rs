//! Weapons tab: each weapon with its damage and the hand it is held in.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph};

use crate::core::character::{Hand, Weapon};
use crate::tui::component::Component;
use crate::tui::components::selected_style;

pub struct WeaponPanel<'a> {
    pub weapons: &'a [Weapon],
    pub selected: Option<usize>,
}

impl<'a> WeaponPanel<'a> {
    pub fn new(weapons: &'a [Weapon], selected: Option<usize>) -> Self {
        Self { weapons, selected }
    }
}

fn hand_tag(weapon: &Weapon) -> &'static str {
    match (weapon.equipped, weapon.hand) {
        (false, _) => "        ",
        (true, Hand::Main) => "[Main] ",
        (true, Hand::Off) => "[Off]  ",
        (true, Hand::Unassigned) => "[E]    ",
    }
}

impl Component for WeaponPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Weapons ")
            .padding(Padding::horizontal(1));

        if self.weapons.is_empty() {
            let empty = Paragraph::new("No weapons. Press a in edit mode to add one.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .weapons
            .iter()
            .map(|weapon| {
                let mut spans = vec![
                    Span::styled(hand_tag(weapon), Style::default().fg(Color::Green)),
                    Span::raw(weapon.name.clone()),
                    Span::styled(format!("  {}", weapon.damage), Style::default().fg(Color::Red)),
                ];
                if !weapon.properties.is_empty() {
                    spans.push(Span::styled(
                        format!("  {}", weapon.properties),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(selected_style());
        let mut state = ListState::default().with_selected(self.selected);
        frame.render_stateful_widget(list, area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_hand_tags() {
        let mut weapon = Weapon::new("Dagger", "1d4 piercing");
        assert_eq!(hand_tag(&weapon).trim(), "");
        weapon.equipped = true;
        weapon.hand = Hand::Off;
        assert_eq!(hand_tag(&weapon).trim(), "[Off]");
    }

    #[test]
    fn test_weapon_rows_render() {
        let backend = TestBackend::new(70, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut sword = Weapon::new("Longsword", "1d8 slashing");
        sword.equipped = true;
        sword.hand = Hand::Main;
        sword.properties = "Versatile (1d10)".to_string();
        let weapons = vec![sword, Weapon::new("Dagger", "1d4 piercing")];

        let mut panel = WeaponPanel::new(&weapons, Some(0));
        terminal.draw(|f| panel.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("[Main] Longsword  1d8 slashing  Versatile (1d10)"));
        assert!(text.contains("Dagger  1d4 piercing"));
    }
}
