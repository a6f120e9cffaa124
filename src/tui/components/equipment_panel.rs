//! # EquipmentPanel Component
//!
//! The Equipment tab, in one of two sub-views:
//!
//! - **Inventory**: every carried item, its slot category and an `[E]` marker
//!   when equipped. The selected row is highlighted.
//! - **Equipped**: the nine body slots and who occupies them.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph};

use crate::core::character::{Equipped, Item, SlotCategory};
use crate::core::state::EquipView;
use crate::tui::component::Component;
use crate::tui::components::selected_style;

pub struct EquipmentPanel<'a> {
    pub view: EquipView,
    pub inventory: &'a [Item],
    pub equipped: &'a Equipped,
    pub selected: Option<usize>,
}

impl<'a> EquipmentPanel<'a> {
    pub fn new(
        view: EquipView,
        inventory: &'a [Item],
        equipped: &'a Equipped,
        selected: Option<usize>,
    ) -> Self {
        Self {
            view,
            inventory,
            equipped,
            selected,
        }
    }

    fn render_inventory(&self, frame: &mut Frame, area: Rect, block: Block) {
        if self.inventory.is_empty() {
            let empty = Paragraph::new("Inventory is empty. Press a in edit mode to add an item.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .inventory
            .iter()
            .map(|item| {
                let marker = if item.equipped { "[E] " } else { "    " };
                let slot = match item.slot {
                    SlotCategory::None => String::new(),
                    slot => format!(" ({})", slot.as_str()),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::raw(format!("{} x{}", item.name, item.quantity)),
                    Span::styled(slot, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(selected_style());
        let mut state = ListState::default().with_selected(self.selected);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_equipped(&self, frame: &mut Frame, area: Rect, block: Block) {
        let occupant = |name: Option<&str>| match name {
            Some(name) => Span::raw(name.to_string()),
            None => Span::styled("(empty)", Style::default().fg(Color::DarkGray)),
        };

        let mut lines: Vec<Line> = self
            .equipped
            .item_slots()
            .into_iter()
            .map(|(label, item)| {
                Line::from(vec![
                    slot_label(label),
                    occupant(item.map(|i| i.name.as_str())),
                ])
            })
            .collect();

        for (label, weapon) in [
            ("Main Hand", self.equipped.main_hand.as_ref()),
            ("Off Hand", self.equipped.off_hand.as_ref()),
        ] {
            lines.push(Line::from(vec![
                slot_label(label),
                occupant(weapon.map(|w| w.name.as_str())),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn slot_label(label: &str) -> Span<'static> {
    Span::styled(
        format!("{:<11}", format!("{}:", label)),
        Style::default().fg(Color::Cyan),
    )
}

impl Component for EquipmentPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (title, help) = match self.view {
            EquipView::Inventory => (" Equipment: Inventory ", " w Equipped view "),
            EquipView::Equipped => (" Equipment: Equipped ", " i Inventory view "),
        };
        let block = Block::bordered()
            .title(title)
            .title_bottom(Line::from(help).centered())
            .padding(Padding::horizontal(1));

        match self.view {
            EquipView::Inventory => self.render_inventory(frame, area, block),
            EquipView::Equipped => self.render_equipped(frame, area, block),
        }
    }
}
