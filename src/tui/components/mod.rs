//! # TUI Components
//!
//! All widgets drawn by the sheet editor. Every component is stateless: it
//! receives its data as props borrowed from `App` and renders it.
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── tab_bar.rs          (Tab strip with mode indicator)
//! ├── status_bar.rs       (Status line + key help)
//! ├── field_form.rs       (Editable text fields of the active tab)
//! ├── equipment_panel.rs  (Inventory / equipped sub-views)
//! ├── weapon_panel.rs     (Weapons with hand assignment)
//! └── list_panel.rs       (Skills, spells, proficiencies)
//! ```
//!
//! Props-based data flow keeps dependencies explicit:
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! StatusBar::new(&app.status_message, help).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! status_bar.render(frame, area); // reads from global App
//! ```

mod equipment_panel;
mod field_form;
mod list_panel;
mod status_bar;
mod tab_bar;
mod weapon_panel;

pub use equipment_panel::EquipmentPanel;
pub use field_form::FieldForm;
pub use list_panel::ListPanel;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
pub use weapon_panel::WeaponPanel;

use ratatui::style::{Color, Modifier, Style};

/// Highlight used for the selected list row and the focused field.
pub(crate) fn selected_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

#[cfg(test)]
pub(crate) fn buffer_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}
