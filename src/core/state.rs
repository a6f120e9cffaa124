//! # Application State
//!
//! Core session state for the sheet editor. This module contains domain
//! logic only, no TUI-specific types. Presentation state lives in `tui`.
//!
//! ```text
//! App
//! ├── character: Character           // the authoritative document
//! ├── tab: Tab                       // active tab
//! ├── mode: Mode                     // view / edit
//! ├── equip_view: EquipView          // inventory / equipped (Equipment tab)
//! ├── inventory_cursor: Cursor       // selection in worklists.inventory
//! ├── weapon_cursor: Cursor          // selection in worklists.weapons
//! ├── worklists: Worklists           // list snapshots, copied back on commit
//! ├── staging: Staging               // provisional text for editable fields
//! ├── compendium: Compendium         // reference templates
//! └── status_message: String         // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::character::{Character, Item, Skill, Spell, Weapon};
use crate::core::compendium::Compendium;
use crate::core::cursor::Cursor;
use crate::core::staging::Staging;
use crate::core::tab::Tab;

pub const WELCOME_MESSAGE: &str = "Welcome to D&D Character Editor!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    View,
    Edit,
}

/// Which half of the Equipment tab is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EquipView {
    #[default]
    Inventory,
    Equipped,
}

/// Working copies of the document's lists. Edits land here first and are
/// copied back into the `Character` on commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worklists {
    pub skills: Vec<Skill>,
    pub inventory: Vec<Item>,
    pub weapons: Vec<Weapon>,
    pub spells: Vec<Spell>,
    pub proficiencies: Vec<String>,
}

impl Worklists {
    pub fn from_character(character: &Character) -> Self {
        Self {
            skills: character.skills.clone(),
            inventory: character.inventory.clone(),
            weapons: character.weapons.clone(),
            spells: character.spells.clone(),
            proficiencies: character.proficiencies.clone(),
        }
    }

    pub fn apply_to(&self, character: &mut Character) {
        character.skills = self.skills.clone();
        character.inventory = self.inventory.clone();
        character.weapons = self.weapons.clone();
        character.spells = self.spells.clone();
        character.proficiencies = self.proficiencies.clone();
    }
}

pub struct App {
    pub character: Character,
    pub tab: Tab,
    pub mode: Mode,
    pub equip_view: EquipView,
    pub inventory_cursor: Cursor,
    pub weapon_cursor: Cursor,
    pub worklists: Worklists,
    pub staging: Staging,
    pub compendium: Compendium,
    pub status_message: String,
}

impl App {
    pub fn new(character: Character, compendium: Compendium) -> Self {
        Self {
            tab: Tab::default(),
            mode: Mode::default(),
            equip_view: EquipView::default(),
            inventory_cursor: Cursor::new(),
            weapon_cursor: Cursor::new(),
            worklists: Worklists::from_character(&character),
            staging: Staging::from_character(&character),
            compendium,
            status_message: String::from(WELCOME_MESSAGE),
            character,
        }
    }

    /// True while keystrokes should go into a text field.
    pub fn text_entry_active(&self) -> bool {
        self.mode == Mode::Edit && self.tab.has_fields()
    }

    /// Moves to `tab`, dropping both list selections and field focus.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.inventory_cursor.reset();
        self.weapon_cursor.reset();
        self.staging.reset_focus();
    }

    /// Replaces the document wholesale, as after a load.
    pub fn replace_character(&mut self, character: Character) {
        self.staging.reload(&character);
        self.worklists = Worklists::from_character(&character);
        self.inventory_cursor.reset();
        self.weapon_cursor.reset();
        self.character = character;
    }
}
