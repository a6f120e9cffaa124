//! Fixed entries for the "add" key when no reference template applies.

use crate::core::character::{Item, ItemId, SlotCategory, Weapon};

/// The eighteen standard skills, in sheet order.
pub const STANDARD_SKILLS: [&str; 18] = [
    "Acrobatics",
    "Animal Handling",
    "Arcana",
    "Athletics",
    "Deception",
    "History",
    "Insight",
    "Intimidation",
    "Investigation",
    "Medicine",
    "Nature",
    "Perception",
    "Performance",
    "Persuasion",
    "Religion",
    "Sleight of Hand",
    "Stealth",
    "Survival",
];

pub fn backpack() -> Item {
    Item {
        id: ItemId::generate(),
        name: "Backpack".to_string(),
        description: "A backpack for carrying items".to_string(),
        quantity: 1,
        weight: "5 lb.".to_string(),
        cost: "2 gp".to_string(),
        equipped: false,
        slot: SlotCategory::None,
    }
}

pub fn longsword() -> Weapon {
    Weapon {
        description: "A versatile martial weapon".to_string(),
        properties: "Versatile (1d10)".to_string(),
        weight: "3 lb.".to_string(),
        cost: "15 gp".to_string(),
        ..Weapon::new("Longsword", "1d8 slashing")
    }
}
