//! # Reference Data
//!
//! Read-only SRD templates for equipment, weapons and spells, loaded from
//! three JSON files in the data directory. Each file is independent: a
//! missing or malformed one leaves only its own collection empty.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::character::{Hand, Item, ItemId, SlotCategory, Spell, Weapon};

pub const EQUIPMENT_FILE: &str = "srd_equipment.json";
pub const WEAPONS_FILE: &str = "srd_weapons.json";
pub const SPELLS_FILE: &str = "srd_spells.json";

#[derive(Debug, Error)]
pub enum CompendiumError {
    #[error("error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error parsing {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrdEquipment {
    pub name: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub equippable: bool,
    #[serde(default)]
    pub slot: SlotCategory,
}

impl SrdEquipment {
    /// A fresh inventory entry. Non-equippable gear never claims a slot.
    pub fn instantiate(&self) -> Item {
        Item {
            id: ItemId::generate(),
            name: self.name.clone(),
            description: self.description.clone(),
            quantity: 1,
            weight: self.weight.clone(),
            cost: self.cost.clone(),
            equipped: false,
            slot: if self.equippable {
                self.slot
            } else {
                SlotCategory::None
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrdWeapon {
    pub name: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub properties: String,
    #[serde(default)]
    pub description: String,
}

impl SrdWeapon {
    pub fn instantiate(&self) -> Weapon {
        Weapon {
            id: ItemId::generate(),
            name: self.name.clone(),
            description: self.description.clone(),
            damage: self.damage.clone(),
            properties: self.properties.clone(),
            weight: self.weight.clone(),
            cost: self.cost.clone(),
            equipped: false,
            hand: Hand::Unassigned,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrdSpell {
    pub name: String,
    pub level: u32,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub casting_time: String,
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub components: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub classes: String,
}

impl SrdSpell {
    pub fn instantiate(&self) -> Spell {
        Spell {
            name: self.name.clone(),
            description: self.description.clone(),
            level: self.level,
            school: self.school.clone(),
            prepared: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compendium {
    pub equipment: Vec<SrdEquipment>,
    pub weapons: Vec<SrdWeapon>,
    pub spells: Vec<SrdSpell>,
}

impl Compendium {
    pub fn is_empty(&self) -> bool {
        self.equipment.is_empty() && self.weapons.is_empty() && self.spells.is_empty()
    }

    /// Equipment templates that can occupy a tracked slot.
    pub fn equippable(&self) -> impl Iterator<Item = &SrdEquipment> {
        self.equipment
            .iter()
            .filter(|e| e.equippable && e.slot != SlotCategory::None)
    }
}

fn read_collection<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, CompendiumError> {
    let json = fs::read_to_string(path).map_err(|source| CompendiumError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| CompendiumError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn load_or_empty<T: for<'de> Deserialize<'de>>(
    path: PathBuf,
    errors: &mut Vec<CompendiumError>,
) -> Vec<T> {
    match read_collection(&path) {
        Ok(records) => {
            info!("Loaded {} records from {}", records.len(), path.display());
            records
        }
        Err(e) => {
            warn!("{}", e);
            errors.push(e);
            Vec::new()
        }
    }
}

/// Loads all three collections from `dir`, collecting per-file failures.
pub fn load_compendium(dir: &Path) -> (Compendium, Vec<CompendiumError>) {
    let mut errors = Vec::new();
    let compendium = Compendium {
        equipment: load_or_empty(dir.join(EQUIPMENT_FILE), &mut errors),
        weapons: load_or_empty(dir.join(WEAPONS_FILE), &mut errors),
        spells: load_or_empty(dir.join(SPELLS_FILE), &mut errors),
    };
    (compendium, errors)
}
