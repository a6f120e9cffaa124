//! # Character Document
//!
//! The owned, mutable aggregate of everything on a character sheet.
//! No behavior lives here beyond serialization rules and a couple of
//! lookups. Slot allocation is in `allocator`, navigation in `action`.
//!
//! ```text
//! Character
//! ├── name, race, class, level, background   // free text, opaque to the core
//! ├── abilities: Abilities                   // six scores, unvalidated
//! ├── skills: Vec<Skill>                     // display order
//! ├── inventory: Vec<Item>                   // each with a SlotCategory
//! ├── weapons: Vec<Weapon>                   // each with a Hand
//! ├── spells: Vec<Spell>
//! ├── proficiencies: Vec<String>
//! ├── currency: Currency                     // five counters, no conversion
//! └── equipped: Equipped                     // the allocation table
//! ```
//!
//! Entries in `Equipped` are copies taken at equip time, not links. They are
//! matched back to their owners by `ItemId`.

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable per-entry identity for inventory items and weapons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body location an item can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SlotCategory {
    Head,
    Body,
    Hands,
    Feet,
    Ring,
    Neck,
    #[default]
    None,
}

impl SlotCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SlotCategory::Head => "head",
            SlotCategory::Body => "body",
            SlotCategory::Hands => "hands",
            SlotCategory::Feet => "feet",
            SlotCategory::Ring => "ring",
            SlotCategory::Neck => "neck",
            SlotCategory::None => "none",
        }
    }

    /// Parses a slot name. Anything unrecognized (e.g. "back") is `None`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "head" => SlotCategory::Head,
            "body" => SlotCategory::Body,
            "hands" => SlotCategory::Hands,
            "feet" => SlotCategory::Feet,
            "ring" => SlotCategory::Ring,
            "neck" => SlotCategory::Neck,
            _ => SlotCategory::None,
        }
    }
}

impl From<String> for SlotCategory {
    fn from(raw: String) -> Self {
        SlotCategory::parse(&raw)
    }
}

impl From<SlotCategory> for String {
    fn from(slot: SlotCategory) -> Self {
        slot.as_str().to_string()
    }
}

/// Which weapon hand a weapon occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Hand {
    #[default]
    #[serde(rename = "")]
    Unassigned,
    #[serde(rename = "main")]
    Main,
    #[serde(rename = "off")]
    Off,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abilities {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl Default for Abilities {
    fn default() -> Self {
        Self {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficient: bool,
    pub modifier: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default = "ItemId::generate")]
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub equipped: bool,
    #[serde(default)]
    pub slot: SlotCategory,
}

impl Item {
    pub fn new(name: impl Into<String>, slot: SlotCategory) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.into(),
            description: String::new(),
            quantity: 1,
            weight: String::new(),
            cost: String::new(),
            equipped: false,
            slot,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    #[serde(default = "ItemId::generate")]
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub properties: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub equipped: bool,
    #[serde(default)]
    pub hand: Hand,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: impl Into<String>) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.into(),
            description: String::new(),
            damage: damage.into(),
            properties: String::new(),
            weight: String::new(),
            cost: String::new(),
            equipped: false,
            hand: Hand::Unassigned,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub level: u32,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub prepared: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub cp: u32,
    pub sp: u32,
    pub ep: u32,
    pub gp: u32,
    pub pp: u32,
}

/// Implemented by anything that can sit in an allocation slot.
pub trait Occupant {
    fn id(&self) -> ItemId;
    fn name(&self) -> &str;
}

impl Occupant for Item {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Occupant for Weapon {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Older files store vacant slots as a record with an empty name.
fn vacant_if_unnamed<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Occupant,
{
    let slot = Option::<T>::deserialize(deserializer)?;
    Ok(slot.filter(|occupant| !occupant.name().is_empty()))
}

/// The allocation table: one reference per body slot, two rings, two hands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipped {
    #[serde(default, deserialize_with = "vacant_if_unnamed")]
    pub head: Option<Item>,
    #[serde(default, deserialize_with = "vacant_if_unnamed")]
    pub body: Option<Item>,
    #[serde(default, deserialize_with = "vacant_if_unnamed")]
    pub hands: Option<Item>,
    #[serde(default, deserialize_with = "vacant_if_unnamed")]
    pub feet: Option<Item>,
    #[serde(default, deserialize_with = "vacant_if_unnamed")]
    pub ring1: Option<Item>,
    #[serde(default, deserialize_with = "vacant_if_unnamed")]
    pub ring2: Option<Item>,
    #[serde(default, deserialize_with = "vacant_if_unnamed")]
    pub neck: Option<Item>,
    #[serde(rename = "mainHand", default, deserialize_with = "vacant_if_unnamed")]
    pub main_hand: Option<Weapon>,
    #[serde(rename = "offHand", default, deserialize_with = "vacant_if_unnamed")]
    pub off_hand: Option<Weapon>,
}

impl Equipped {
    /// Item slots paired with their display labels, in sheet order.
    pub fn item_slots(&self) -> [(&'static str, Option<&Item>); 7] {
        [
            ("Head", self.head.as_ref()),
            ("Body", self.body.as_ref()),
            ("Hands", self.hands.as_ref()),
            ("Feet", self.feet.as_ref()),
            ("Ring 1", self.ring1.as_ref()),
            ("Ring 2", self.ring2.as_ref()),
            ("Neck", self.neck.as_ref()),
        ]
    }

    fn item_slots_mut(&mut self) -> [&mut Option<Item>; 7] {
        [
            &mut self.head,
            &mut self.body,
            &mut self.hands,
            &mut self.feet,
            &mut self.ring1,
            &mut self.ring2,
            &mut self.neck,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub race: String,
    pub class: String,
    pub level: u32,
    pub abilities: Abilities,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default, alias = "equipment")]
    pub inventory: Vec<Item>,
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default)]
    pub spells: Vec<Spell>,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub proficiencies: Vec<String>,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub equipped: Equipped,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            name: "New Character".to_string(),
            race: "Human".to_string(),
            class: "Fighter".to_string(),
            level: 1,
            abilities: Abilities::default(),
            skills: Vec::new(),
            inventory: Vec::new(),
            weapons: Vec::new(),
            spells: Vec::new(),
            background: "Acolyte".to_string(),
            proficiencies: Vec::new(),
            // Starting gold for most classes
            currency: Currency {
                gp: 15,
                ..Currency::default()
            },
            equipped: Equipped::default(),
        }
    }
}

impl Character {
    /// Re-points allocation slots at their owning entries after a load.
    ///
    /// Files written before ids existed get fresh ids on every entry, so the
    /// copies in `equipped` no longer match anything. Each orphaned slot is
    /// relinked by name to the first equipped entry carrying that name that
    /// no other slot holds. An orphan with no such owner is vacated.
    /// Returns the number of slots relinked.
    pub fn relink_equipped(&mut self) -> usize {
        let items = relink_slots(&mut self.equipped.item_slots_mut(), &self.inventory);
        let weapons = relink_slots(
            &mut [&mut self.equipped.main_hand, &mut self.equipped.off_hand],
            &self.weapons,
        );
        items + weapons
    }
}

fn relink_slots<T>(slots: &mut [&mut Option<T>], owners: &[T]) -> usize
where
    T: Occupant + Owned,
{
    let is_owned = |id: ItemId| owners.iter().any(|owner| owner.id() == id);

    // Slots already linked by id claim their owners before any relinking
    let mut claimed: Vec<ItemId> = slots
        .iter()
        .filter_map(|slot| (**slot).as_ref().map(|occupant| occupant.id()))
        .filter(|&id| is_owned(id))
        .collect();

    let mut relinked = 0;
    for slot in slots.iter_mut() {
        let Some(occupant) = (**slot).as_mut() else {
            continue;
        };
        if is_owned(occupant.id()) {
            continue;
        }
        let owner = owners.iter().find(|owner| {
            owner.is_equipped()
                && owner.name() == occupant.name()
                && !claimed.contains(&owner.id())
        });
        match owner {
            Some(owner) => {
                claimed.push(owner.id());
                occupant.set_id(owner.id());
                relinked += 1;
            }
            None => {
                warn!("Vacating slot held by {:?}: no equipped owner", occupant.name());
                **slot = None;
            }
        }
    }
    relinked
}

trait Owned {
    fn is_equipped(&self) -> bool;
    fn set_id(&mut self, id: ItemId);
}

impl Owned for Item {
    fn is_equipped(&self) -> bool {
        self.equipped
    }

    fn set_id(&mut self, id: ItemId) {
        self.id = id;
    }
}

impl Owned for Weapon {
    fn is_equipped(&self) -> bool {
        self.equipped
    }

    fn set_id(&mut self, id: ItemId) {
        self.id = id;
    }
}
