use crate::core::state::{App, Mode};
use crate::core::tab::Tab;
use crate::tui::component::Component;
use crate::tui::components::{EquipmentPanel, FieldForm, ListPanel, StatusBar, TabBar, WeaponPanel};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(3), Min(0), Length(2)]);
    let [tab_area, main_area, status_area] = layout.areas(frame.area());

    TabBar::new(app.tab, app.mode).render(frame, tab_area);
    draw_tab_content(frame, main_area, app);
    StatusBar::new(&app.status_message, help_text(app)).render(frame, status_area);
}

fn draw_tab_content(frame: &mut Frame, area: Rect, app: &App) {
    let lists = &app.worklists;
    match app.tab {
        Tab::Equipment => EquipmentPanel::new(
            app.equip_view,
            &lists.inventory,
            &app.character.equipped,
            app.inventory_cursor.selected(lists.inventory.len()),
        )
        .render(frame, area),
        Tab::Weapons => WeaponPanel::new(
            &lists.weapons,
            app.weapon_cursor.selected(lists.weapons.len()),
        )
        .render(frame, area),
        Tab::Skills => ListPanel::skills(&lists.skills).render(frame, area),
        Tab::Spells => ListPanel::spells(&lists.spells).render(frame, area),
        Tab::Proficiencies => ListPanel::proficiencies(&lists.proficiencies).render(frame, area),
        tab => FieldForm::new(
            tab,
            &app.character,
            &app.staging,
            app.mode == Mode::Edit,
        )
        .render(frame, area),
    }
}

fn help_text(app: &App) -> &'static str {
    if app.text_entry_active() {
        return " Type to edit  ↑/↓ Field  Enter Apply  Esc View  Tab Next tab  Ctrl+S Save ";
    }
    match (app.mode, app.tab) {
        (Mode::Edit, Tab::Equipment | Tab::Weapons) => {
            " ←/→ Select  Space Equip  a Add  i/w Sub-view  Enter Apply  s Save  v View  q Quit "
        }
        (Mode::Edit, _) => " ←/→ Tabs  a Add  Enter Apply  s Save  l Load  v View  q Quit ",
        (Mode::View, _) => " ←/→ Tabs  1-9 Jump  e Edit  l Load  i/w Sub-view  q Quit ",
    }
}
