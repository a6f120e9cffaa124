//! # Actions
//!
//! Everything that can happen in the editor becomes an `Action`.
//! User presses space on a ring? That's `Action::ToggleEquip`.
//! A save finishes? That's `Action::Saved { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the adapter must
//! perform. No side effects here. I/O happens elsewhere and its result comes
//! back as another action.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable without a terminal: build an `App`,
//! feed it actions, assert on the result.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use log::{debug, info};

use crate::core::allocator::{self, Allocation};
use crate::core::character::{Character, Skill};
use crate::core::samples;
use crate::core::state::{App, EquipView, Mode};
use crate::core::tab::Tab;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Next,
    Prev,
    SelectTab(Tab),
    EnterEdit,
    EnterView,
    ShowInventory,
    ShowEquipped,

    // Editing (edit mode only)
    Commit,
    ToggleEquip,
    AddSample,
    Type(char),
    Paste(String),
    Erase,
    FocusNext,
    FocusPrev,

    // Persistence requests and results
    Save,
    Load,
    Saved { path: PathBuf, at: DateTime<Local> },
    Loaded(Character),
    NothingToLoad,
    StoreFailed(String),

    Quit,
}

/// I/O the adapter performs after `update()` returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SaveCharacter(Character),
    LoadCharacter,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    let editing = app.mode == Mode::Edit;

    match action {
        Action::Next => navigate(app, true),
        Action::Prev => navigate(app, false),
        Action::SelectTab(tab) => app.switch_tab(tab),
        Action::EnterEdit => app.mode = Mode::Edit,
        Action::EnterView => app.mode = Mode::View,
        Action::ShowInventory => {
            if app.tab == Tab::Equipment {
                app.equip_view = EquipView::Inventory;
                app.status_message = "Viewing inventory".to_string();
            }
        }
        Action::ShowEquipped => {
            if app.tab == Tab::Equipment {
                app.equip_view = EquipView::Equipped;
                app.status_message = "Viewing equipped items".to_string();
            }
        }

        Action::Commit if editing => commit(app),
        Action::ToggleEquip if editing => toggle_equip(app),
        Action::AddSample if editing => add_sample(app),
        Action::Type(c) if editing => {
            app.staging.push(app.tab, c);
        }
        Action::Paste(text) if editing => {
            app.staging.paste(app.tab, &text);
        }
        Action::Erase if editing => {
            app.staging.pop(app.tab);
        }
        Action::FocusNext if editing => app.staging.focus_next(app.tab),
        Action::FocusPrev if editing => app.staging.focus_prev(app.tab),
        Action::Commit
        | Action::ToggleEquip
        | Action::AddSample
        | Action::Type(_)
        | Action::Paste(_)
        | Action::Erase
        | Action::FocusNext
        | Action::FocusPrev => {}

        Action::Save => {
            if editing {
                // Slots held by uncommitted entries are left out of the file
                let mut snapshot = app.character.clone();
                snapshot.relink_equipped();
                return Effect::SaveCharacter(snapshot);
            }
            app.status_message = "Press e to enter edit mode before saving".to_string();
        }
        Action::Load => return Effect::LoadCharacter,
        Action::Saved { path, at } => {
            app.status_message = format!(
                "Character saved successfully! ({} at {})",
                path.display(),
                at.format("%H:%M:%S")
            );
        }
        Action::Loaded(character) => {
            app.status_message = format!("Loaded character: {}", character.name);
            app.replace_character(character);
        }
        Action::NothingToLoad => {
            app.status_message = "No saved characters found".to_string();
        }
        Action::StoreFailed(message) => app.status_message = message,

        Action::Quit => return Effect::Quit,
    }
    Effect::None
}

/// Moves the list cursor when the active tab has a navigable list,
/// otherwise switches tabs.
fn navigate(app: &mut App, forward: bool) {
    let inventory_len = app.worklists.inventory.len();
    let weapons_len = app.worklists.weapons.len();

    if app.tab == Tab::Equipment && app.equip_view == EquipView::Inventory && inventory_len > 0 {
        if forward {
            app.inventory_cursor.advance(inventory_len);
        } else {
            app.inventory_cursor.retreat(inventory_len);
        }
    } else if app.tab == Tab::Weapons && weapons_len > 0 {
        if forward {
            app.weapon_cursor.advance(weapons_len);
        } else {
            app.weapon_cursor.retreat(weapons_len);
        }
    } else {
        let tab = if forward { app.tab.next() } else { app.tab.prev() };
        app.switch_tab(tab);
    }
}

fn commit(app: &mut App) {
    let report = app.staging.commit(app.tab, &mut app.character);
    app.worklists.apply_to(&mut app.character);

    app.status_message = if report.ignored.is_empty() {
        "Character data updated!".to_string()
    } else {
        let labels: Vec<&str> = report.ignored.iter().map(|f| f.label()).collect();
        format!(
            "Character data updated! Kept previous {} (not a whole number)",
            labels.join(", ")
        )
    };
}

fn allocation_message(name: &str, allocation: Allocation) -> String {
    match allocation {
        Allocation::Rejected(rejection) => rejection.to_string(),
        a if a.is_equipped() => format!("{} equipped", name),
        _ => format!("{} unequipped", name),
    }
}

fn toggle_equip(app: &mut App) {
    let (name, allocation) = match app.tab {
        Tab::Equipment => {
            let Some(i) = app.inventory_cursor.selected(app.worklists.inventory.len()) else {
                return;
            };
            let item = &mut app.worklists.inventory[i];
            let allocation = allocator::toggle_item(&mut app.character.equipped, item);
            // Committed entries track the slot state right away
            if let Some(owner) = app.character.inventory.iter_mut().find(|o| o.id == item.id) {
                owner.equipped = item.equipped;
            }
            (item.name.clone(), allocation)
        }
        Tab::Weapons => {
            let Some(i) = app.weapon_cursor.selected(app.worklists.weapons.len()) else {
                return;
            };
            let weapon = &mut app.worklists.weapons[i];
            let allocation = allocator::toggle_weapon(&mut app.character.equipped, weapon);
            if let Some(owner) = app.character.weapons.iter_mut().find(|o| o.id == weapon.id) {
                owner.equipped = weapon.equipped;
                owner.hand = weapon.hand;
            }
            (weapon.name.clone(), allocation)
        }
        _ => return,
    };

    if let Allocation::Equipped {
        slot,
        displaced: Some(previous),
    } = allocation
    {
        info!(
            "{} replaced entry {} in the {} slot",
            name,
            previous,
            slot.label()
        );
    }
    app.status_message = allocation_message(&name, allocation);
}

fn add_sample(app: &mut App) {
    match app.tab {
        Tab::Equipment => {
            let templates: Vec<_> = app.compendium.equippable().collect();
            let item = if templates.is_empty() {
                samples::backpack()
            } else {
                templates[app.worklists.inventory.len() % templates.len()].instantiate()
            };
            app.status_message = format!("Added {} to equipment", item.name.to_lowercase());
            app.worklists.inventory.push(item);
        }
        Tab::Weapons => {
            let templates = &app.compendium.weapons;
            let weapon = if templates.is_empty() {
                samples::longsword()
            } else {
                templates[app.worklists.weapons.len() % templates.len()].instantiate()
            };
            app.status_message = format!("Added {} to weapons", weapon.name.to_lowercase());
            app.worklists.weapons.push(weapon);
        }
        Tab::Spells => {
            let templates = &app.compendium.spells;
            if templates.is_empty() {
                app.status_message = "No spell templates loaded".to_string();
                return;
            }
            let spell = templates[app.worklists.spells.len() % templates.len()].instantiate();
            app.status_message = format!("Added {} to spells", spell.name);
            app.worklists.spells.push(spell);
        }
        Tab::Skills => {
            let next = samples::STANDARD_SKILLS
                .iter()
                .find(|name| !app.worklists.skills.iter().any(|s| s.name == **name));
            match next {
                Some(name) => {
                    app.worklists.skills.push(Skill {
                        name: name.to_string(),
                        proficient: false,
                        modifier: 0,
                    });
                    app.status_message = format!("Added {} to skills", name);
                }
                None => app.status_message = "All standard skills already listed".to_string(),
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::character::{Equipped, Hand, Item, SlotCategory, Weapon};
    use crate::core::compendium::{Compendium, SrdEquipment, SrdSpell};
    use crate::core::tab::Field;
    use crate::test_support::{editing_app, test_app};

    fn run(app: &mut App, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            update(app, action);
        }
    }

    #[test]
    fn test_next_prev_switch_tabs_and_wrap() {
        let mut app = test_app();
        update(&mut app, Action::Prev);
        assert_eq!(app.tab, Tab::Currency);
        update(&mut app, Action::Next);
        assert_eq!(app.tab, Tab::BasicInfo);
    }

    #[test]
    fn test_inventory_cursor_captures_navigation() {
        let mut app = test_app();
        app.worklists.inventory = vec![
            Item::new("Helm", SlotCategory::Head),
            Item::new("Boots", SlotCategory::Feet),
            Item::new("Cloak", SlotCategory::Body),
        ];
        app.switch_tab(Tab::Equipment);

        let mut seen = Vec::new();
        for _ in 0..4 {
            update(&mut app, Action::Next);
            seen.push(app.inventory_cursor.index());
        }
        assert_eq!(seen, vec![Some(0), Some(1), Some(2), Some(0)]);
        assert_eq!(app.tab, Tab::Equipment);
    }

    #[test]
    fn test_empty_inventory_moves_tabs() {
        let mut app = test_app();
        app.switch_tab(Tab::Equipment);
        update(&mut app, Action::Next);
        assert_eq!(app.tab, Tab::Weapons);
        assert_eq!(app.inventory_cursor.index(), None);
    }

    #[test]
    fn test_equipped_view_releases_navigation() {
        let mut app = test_app();
        app.worklists.inventory.push(Item::new("Helm", SlotCategory::Head));
        app.switch_tab(Tab::Equipment);
        update(&mut app, Action::Next);
        assert_eq!(app.inventory_cursor.index(), Some(0));

        update(&mut app, Action::ShowEquipped);
        assert_eq!(app.status_message, "Viewing equipped items");
        update(&mut app, Action::Next);

        assert_eq!(app.tab, Tab::Weapons);
        assert_eq!(app.inventory_cursor.index(), None);
    }

    #[test]
    fn test_leaving_tab_resets_cursors() {
        let mut app = test_app();
        app.worklists.weapons.push(Weapon::new("Dagger", "1d4 piercing"));
        app.switch_tab(Tab::Weapons);
        update(&mut app, Action::Next);
        assert_eq!(app.weapon_cursor.index(), Some(0));

        update(&mut app, Action::SelectTab(Tab::Spells));
        assert_eq!(app.weapon_cursor.index(), None);
    }

    #[test]
    fn test_sub_view_keys_only_on_equipment_tab() {
        let mut app = test_app();
        update(&mut app, Action::ShowEquipped);
        assert_eq!(app.equip_view, EquipView::Inventory);
    }

    #[test]
    fn test_toggle_requires_edit_mode() {
        let mut app = test_app();
        app.worklists.inventory.push(Item::new("Helm", SlotCategory::Head));
        app.switch_tab(Tab::Equipment);
        update(&mut app, Action::Next);

        update(&mut app, Action::ToggleEquip);

        assert!(!app.worklists.inventory[0].equipped);
        assert_eq!(app.character.equipped, Equipped::default());
    }

    #[test]
    fn test_toggle_without_selection_is_noop() {
        let mut app = editing_app();
        app.worklists.inventory.push(Item::new("Helm", SlotCategory::Head));
        app.switch_tab(Tab::Equipment);
        update(&mut app, Action::ToggleEquip);
        assert!(!app.worklists.inventory[0].equipped);
    }

    #[test]
    fn test_add_equip_unequip_scenario() {
        let mut app = editing_app();
        app.compendium = Compendium {
            equipment: vec![SrdEquipment {
                name: "Circlet of Blasting".to_string(),
                cost: "1500 gp".to_string(),
                weight: "-".to_string(),
                category: "Wondrous Item".to_string(),
                description: String::new(),
                equippable: true,
                slot: SlotCategory::Head,
            }],
            ..Default::default()
        };
        app.switch_tab(Tab::Equipment);

        run(&mut app, [Action::AddSample, Action::Next, Action::ToggleEquip]);

        let head = app.character.equipped.head.as_ref().map(|i| i.name.as_str());
        assert_eq!(head, Some("Circlet of Blasting"));
        assert!(app.worklists.inventory[0].equipped);
        assert_eq!(app.status_message, "Circlet of Blasting equipped");

        update(&mut app, Action::ToggleEquip);

        assert!(app.character.equipped.head.is_none());
        assert!(!app.worklists.inventory[0].equipped);
        assert_eq!(app.status_message, "Circlet of Blasting unequipped");
    }

    #[test]
    fn test_third_ring_reports_rejection() {
        let mut app = editing_app();
        app.worklists.inventory = (0..3)
            .map(|i| Item::new(format!("Ring {}", i), SlotCategory::Ring))
            .collect();
        app.switch_tab(Tab::Equipment);

        for _ in 0..3 {
            run(&mut app, [Action::Next, Action::ToggleEquip]);
        }

        assert_eq!(app.status_message, "No ring slots available");
        assert!(!app.worklists.inventory[2].equipped);
        assert!(app.character.equipped.ring1.is_some());
        assert!(app.character.equipped.ring2.is_some());
    }

    #[test]
    fn test_weapon_toggle_assigns_hands() {
        let mut app = editing_app();
        app.switch_tab(Tab::Weapons);
        run(&mut app, [Action::AddSample, Action::AddSample, Action::AddSample]);
        assert_eq!(app.status_message, "Added longsword to weapons");

        for _ in 0..3 {
            run(&mut app, [Action::Next, Action::ToggleEquip]);
        }

        let hands: Vec<Hand> = app.worklists.weapons.iter().map(|w| w.hand).collect();
        assert_eq!(hands, vec![Hand::Main, Hand::Off, Hand::Unassigned]);
        assert_eq!(app.status_message, "No hand available for weapon");
    }

    #[test]
    fn test_add_backpack_without_templates() {
        let mut app = editing_app();
        app.switch_tab(Tab::Equipment);
        update(&mut app, Action::AddSample);
        assert_eq!(app.worklists.inventory[0].name, "Backpack");
        assert_eq!(app.status_message, "Added backpack to equipment");
        // Not yet in the document
        assert!(app.character.inventory.is_empty());
    }

    #[test]
    fn test_add_spell_needs_templates() {
        let mut app = editing_app();
        app.switch_tab(Tab::Spells);
        update(&mut app, Action::AddSample);
        assert_eq!(app.status_message, "No spell templates loaded");

        app.compendium.spells.push(SrdSpell {
            name: "Light".to_string(),
            level: 0,
            school: "Evocation".to_string(),
            casting_time: "1 action".to_string(),
            range: "Touch".to_string(),
            components: "V, M".to_string(),
            duration: "1 hour".to_string(),
            description: String::new(),
            classes: "Bard, Cleric".to_string(),
        });
        update(&mut app, Action::AddSample);
        assert_eq!(app.worklists.spells.len(), 1);
        assert_eq!(app.worklists.spells[0].school, "Evocation");
    }

    #[test]
    fn test_add_skill_skips_listed_ones() {
        let mut app = editing_app();
        app.switch_tab(Tab::Skills);
        run(&mut app, [Action::AddSample, Action::AddSample]);
        let names: Vec<_> = app.worklists.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Acrobatics", "Animal Handling"]);
    }

    #[test]
    fn test_commit_copies_staging_and_worklists() {
        let mut app = editing_app();
        app.switch_tab(Tab::Abilities);
        run(&mut app, [Action::Erase, Action::Erase, Action::Type('1'), Action::Type('7')]);
        app.worklists.proficiencies.push("Thieves' Tools".to_string());

        update(&mut app, Action::Commit);

        assert_eq!(app.character.abilities.strength, 17);
        assert_eq!(app.character.proficiencies, vec!["Thieves' Tools".to_string()]);
        assert_eq!(app.status_message, "Character data updated!");
    }

    #[test]
    fn test_commit_reports_ignored_numbers() {
        let mut app = editing_app();
        run(&mut app, [Action::FocusPrev, Action::Type('x')]);
        assert_eq!(app.staging.value(Field::Level), "1x");

        update(&mut app, Action::Commit);

        assert_eq!(app.character.level, 1);
        assert!(app.status_message.contains("Level"));
    }

    #[test]
    fn test_typing_ignored_in_view_mode() {
        let mut app = test_app();
        update(&mut app, Action::Type('z'));
        assert_eq!(app.staging.value(Field::Name), "New Character");
        update(&mut app, Action::Commit);
        assert_eq!(app.status_message, crate::core::state::WELCOME_MESSAGE);
    }

    #[test]
    fn test_save_only_in_edit_mode() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Save), Effect::None);

        update(&mut app, Action::EnterEdit);
        let effect = update(&mut app, Action::Save);
        assert_eq!(effect, Effect::SaveCharacter(app.character.clone()));
    }

    #[test]
    fn test_save_leaves_out_slots_of_uncommitted_entries() {
        let mut app = editing_app();
        app.switch_tab(Tab::Equipment);
        app.worklists.inventory.push(Item::new("Helm", SlotCategory::Head));
        run(&mut app, [Action::Next, Action::ToggleEquip]);
        assert!(app.character.equipped.head.is_some());

        let Effect::SaveCharacter(snapshot) = update(&mut app, Action::Save) else {
            panic!("expected a save effect");
        };
        assert!(snapshot.inventory.is_empty());
        assert!(snapshot.equipped.head.is_none());
        // The live session still shows the pending equip
        assert!(app.character.equipped.head.is_some());
    }

    #[test]
    fn test_toggle_updates_committed_entry_flags() {
        let mut app = editing_app();
        app.switch_tab(Tab::Equipment);
        app.worklists.inventory.push(Item::new("Helm", SlotCategory::Head));
        run(&mut app, [Action::Commit, Action::Next, Action::ToggleEquip]);
        assert!(app.character.inventory[0].equipped);

        let Effect::SaveCharacter(snapshot) = update(&mut app, Action::Save) else {
            panic!("expected a save effect");
        };
        assert_eq!(
            snapshot.equipped.head.as_ref().map(|i| i.id),
            Some(snapshot.inventory[0].id)
        );
        assert!(snapshot.inventory[0].equipped);

        update(&mut app, Action::ToggleEquip);
        assert!(!app.character.inventory[0].equipped);
    }

    #[test]
    fn test_weapon_toggle_updates_committed_hand() {
        let mut app = editing_app();
        app.switch_tab(Tab::Weapons);
        app.worklists.weapons.push(Weapon::new("Dagger", "1d4 piercing"));
        run(&mut app, [Action::Commit, Action::Next, Action::ToggleEquip]);

        let committed = &app.character.weapons[0];
        assert!(committed.equipped);
        assert_eq!(committed.hand, Hand::Main);
    }

    #[test]
    fn test_load_replaces_document() {
        let mut app = editing_app();
        app.switch_tab(Tab::Equipment);
        update(&mut app, Action::AddSample);
        assert_eq!(update(&mut app, Action::Load), Effect::LoadCharacter);

        let mut loaded = Character::default();
        loaded.name = "Ember".to_string();
        loaded.weapons.push(Weapon::new("Quarterstaff", "1d6 bludgeoning"));
        update(&mut app, Action::Loaded(loaded.clone()));

        assert_eq!(app.character, loaded);
        assert!(app.worklists.inventory.is_empty());
        assert_eq!(app.worklists.weapons.len(), 1);
        assert_eq!(app.status_message, "Loaded character: Ember");
    }

    #[test]
    fn test_store_failure_keeps_document() {
        let mut app = test_app();
        let before = app.character.clone();
        update(
            &mut app,
            Action::StoreFailed("Error loading character: bad json".to_string()),
        );
        assert_eq!(app.character, before);
        assert_eq!(app.status_message, "Error loading character: bad json");
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
