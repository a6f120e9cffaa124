//! # Slot Allocator
//!
//! Decides whether an equip or unequip request is legal and applies the
//! result to the allocation table and the entry's own flags in one step.
//!
//! Body slots (head, body, hands, feet, neck) overwrite their occupant.
//! Rings fill ring1 then ring2 and never evict. Weapons fill the requested
//! hand first and fall back to the other one.
//!
//! Occupants are matched by `ItemId`, so two entries that share a name
//! never clear each other's slot.

use std::fmt;

use crate::core::character::{Equipped, Hand, Item, ItemId, Occupant, SlotCategory, Weapon};

/// A single position in the allocation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySlot {
    Head,
    Body,
    Hands,
    Feet,
    Ring1,
    Ring2,
    Neck,
    MainHand,
    OffHand,
}

impl BodySlot {
    pub fn label(self) -> &'static str {
        match self {
            BodySlot::Head => "head",
            BodySlot::Body => "body",
            BodySlot::Hands => "hands",
            BodySlot::Feet => "feet",
            BodySlot::Ring1 => "ring 1",
            BodySlot::Ring2 => "ring 2",
            BodySlot::Neck => "neck",
            BodySlot::MainHand => "main hand",
            BodySlot::OffHand => "off hand",
        }
    }
}

/// Why an equip request was turned down. These are routine outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NoRingSlot,
    NoHandAvailable,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NoRingSlot => write!(f, "No ring slots available"),
            Rejection::NoHandAvailable => write!(f, "No hand available for weapon"),
        }
    }
}

/// Result of an allocator operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    /// Stored in `slot`. `displaced` is the previous occupant, whose own
    /// `equipped` flag is left as it was.
    Equipped {
        slot: BodySlot,
        displaced: Option<ItemId>,
    },
    /// Flagged as equipped but the category has no tracked slot.
    EquippedUntracked,
    /// Flag cleared. `cleared` names the slot that held this exact entry, if any.
    Unequipped { cleared: Option<BodySlot> },
    Rejected(Rejection),
}

impl Allocation {
    pub fn is_equipped(&self) -> bool {
        matches!(
            self,
            Allocation::Equipped { .. } | Allocation::EquippedUntracked
        )
    }
}

fn fixed_slot(
    table: &mut Equipped,
    category: SlotCategory,
) -> Option<(BodySlot, &mut Option<Item>)> {
    match category {
        SlotCategory::Head => Some((BodySlot::Head, &mut table.head)),
        SlotCategory::Body => Some((BodySlot::Body, &mut table.body)),
        SlotCategory::Hands => Some((BodySlot::Hands, &mut table.hands)),
        SlotCategory::Feet => Some((BodySlot::Feet, &mut table.feet)),
        SlotCategory::Neck => Some((BodySlot::Neck, &mut table.neck)),
        SlotCategory::Ring | SlotCategory::None => None,
    }
}

fn holds<T: Occupant>(slot: &Option<T>, id: ItemId) -> bool {
    slot.as_ref().is_some_and(|occupant| occupant.id() == id)
}

pub fn equip_item(table: &mut Equipped, item: &mut Item) -> Allocation {
    match item.slot {
        SlotCategory::Ring => {
            let free = if table.ring1.is_none() {
                Some((BodySlot::Ring1, &mut table.ring1))
            } else if table.ring2.is_none() {
                Some((BodySlot::Ring2, &mut table.ring2))
            } else {
                None
            };
            match free {
                Some((slot, entry)) => {
                    item.equipped = true;
                    *entry = Some(item.clone());
                    Allocation::Equipped {
                        slot,
                        displaced: None,
                    }
                }
                None => {
                    item.equipped = false;
                    Allocation::Rejected(Rejection::NoRingSlot)
                }
            }
        }
        category => match fixed_slot(table, category) {
            Some((slot, entry)) => {
                item.equipped = true;
                let displaced = entry
                    .replace(item.clone())
                    .map(|previous| previous.id)
                    .filter(|&previous| previous != item.id);
                Allocation::Equipped { slot, displaced }
            }
            None => {
                item.equipped = true;
                Allocation::EquippedUntracked
            }
        },
    }
}

pub fn unequip_item(table: &mut Equipped, item: &mut Item) -> Allocation {
    item.equipped = false;

    let cleared = match item.slot {
        SlotCategory::Ring => {
            if holds(&table.ring1, item.id) {
                table.ring1 = None;
                Some(BodySlot::Ring1)
            } else if holds(&table.ring2, item.id) {
                table.ring2 = None;
                Some(BodySlot::Ring2)
            } else {
                None
            }
        }
        category => fixed_slot(table, category).and_then(|(slot, entry)| {
            if holds(&*entry, item.id) {
                *entry = None;
                Some(slot)
            } else {
                None
            }
        }),
    };
    Allocation::Unequipped { cleared }
}

/// Equips if the item is unequipped, unequips otherwise.
pub fn toggle_item(table: &mut Equipped, item: &mut Item) -> Allocation {
    if item.equipped {
        unequip_item(table, item)
    } else {
        equip_item(table, item)
    }
}

/// Places a weapon in the hand it asks for, or the other hand if that one
/// is taken. An unassigned weapon asks for the main hand.
pub fn equip_weapon(table: &mut Equipped, weapon: &mut Weapon) -> Allocation {
    let order = match weapon.hand {
        Hand::Off => [Hand::Off, Hand::Main],
        Hand::Main | Hand::Unassigned => [Hand::Main, Hand::Off],
    };

    for hand in order {
        let (slot, entry) = match hand {
            Hand::Off => (BodySlot::OffHand, &mut table.off_hand),
            _ => (BodySlot::MainHand, &mut table.main_hand),
        };
        if entry.is_none() {
            weapon.equipped = true;
            weapon.hand = hand;
            *entry = Some(weapon.clone());
            return Allocation::Equipped {
                slot,
                displaced: None,
            };
        }
    }

    weapon.equipped = false;
    Allocation::Rejected(Rejection::NoHandAvailable)
}

pub fn unequip_weapon(table: &mut Equipped, weapon: &mut Weapon) -> Allocation {
    weapon.equipped = false;
    weapon.hand = Hand::Unassigned;

    let cleared = if holds(&table.main_hand, weapon.id) {
        table.main_hand = None;
        Some(BodySlot::MainHand)
    } else if holds(&table.off_hand, weapon.id) {
        table.off_hand = None;
        Some(BodySlot::OffHand)
    } else {
        None
    };
    Allocation::Unequipped { cleared }
}

/// Equips if the weapon is unequipped, unequips otherwise.
pub fn toggle_weapon(table: &mut Equipped, weapon: &mut Weapon) -> Allocation {
    if weapon.equipped {
        unequip_weapon(table, weapon)
    } else {
        equip_weapon(table, weapon)
    }
}
