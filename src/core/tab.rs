//! # Tabs and Editable Fields
//!
//! The nine fixed sheet tabs, and the explicit mapping from each tab to the
//! text fields that are editable while it is active.

use crate::core::character::Character;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    BasicInfo,
    Abilities,
    Skills,
    Equipment,
    Weapons,
    Spells,
    Background,
    Proficiencies,
    Currency,
}

impl Tab {
    pub const ALL: [Tab; 9] = [
        Tab::BasicInfo,
        Tab::Abilities,
        Tab::Skills,
        Tab::Equipment,
        Tab::Weapons,
        Tab::Spells,
        Tab::Background,
        Tab::Proficiencies,
        Tab::Currency,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::BasicInfo => "Basic Info",
            Tab::Abilities => "Abilities",
            Tab::Skills => "Skills",
            Tab::Equipment => "Equipment",
            Tab::Weapons => "Weapons",
            Tab::Spells => "Spells",
            Tab::Background => "Background",
            Tab::Proficiencies => "Proficiencies",
            Tab::Currency => "Currency",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL
            .iter()
            .position(|&tab| tab == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Text fields editable while this tab is active, in display order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Tab::BasicInfo => &[Field::Name, Field::Race, Field::Class, Field::Level],
            Tab::Abilities => &[
                Field::Strength,
                Field::Dexterity,
                Field::Constitution,
                Field::Intelligence,
                Field::Wisdom,
                Field::Charisma,
            ],
            Tab::Background => &[Field::Background],
            Tab::Currency => &[
                Field::Copper,
                Field::Silver,
                Field::Electrum,
                Field::Gold,
                Field::Platinum,
            ],
            Tab::Skills | Tab::Equipment | Tab::Weapons | Tab::Spells | Tab::Proficiencies => &[],
        }
    }

    pub fn has_fields(self) -> bool {
        !self.fields().is_empty()
    }
}

/// A single staged text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Race,
    Class,
    Level,
    Background,
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
    Copper,
    Silver,
    Electrum,
    Gold,
    Platinum,
}

impl Field {
    pub const ALL: [Field; 16] = [
        Field::Name,
        Field::Race,
        Field::Class,
        Field::Level,
        Field::Background,
        Field::Strength,
        Field::Dexterity,
        Field::Constitution,
        Field::Intelligence,
        Field::Wisdom,
        Field::Charisma,
        Field::Copper,
        Field::Silver,
        Field::Electrum,
        Field::Gold,
        Field::Platinum,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Race => "Race",
            Field::Class => "Class",
            Field::Level => "Level",
            Field::Background => "Background",
            Field::Strength => "Strength",
            Field::Dexterity => "Dexterity",
            Field::Constitution => "Constitution",
            Field::Intelligence => "Intelligence",
            Field::Wisdom => "Wisdom",
            Field::Charisma => "Charisma",
            Field::Copper => "Copper",
            Field::Silver => "Silver",
            Field::Electrum => "Electrum",
            Field::Gold => "Gold",
            Field::Platinum => "Platinum",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            Field::Name | Field::Race | Field::Class | Field::Background
        )
    }

    /// Current document value rendered as text.
    pub fn read(self, c: &Character) -> String {
        match self {
            Field::Name => c.name.clone(),
            Field::Race => c.race.clone(),
            Field::Class => c.class.clone(),
            Field::Background => c.background.clone(),
            Field::Level => c.level.to_string(),
            Field::Strength => c.abilities.strength.to_string(),
            Field::Dexterity => c.abilities.dexterity.to_string(),
            Field::Constitution => c.abilities.constitution.to_string(),
            Field::Intelligence => c.abilities.intelligence.to_string(),
            Field::Wisdom => c.abilities.wisdom.to_string(),
            Field::Charisma => c.abilities.charisma.to_string(),
            Field::Copper => c.currency.cp.to_string(),
            Field::Silver => c.currency.sp.to_string(),
            Field::Electrum => c.currency.ep.to_string(),
            Field::Gold => c.currency.gp.to_string(),
            Field::Platinum => c.currency.pp.to_string(),
        }
    }

    /// Writes `raw` into the document. Numeric fields that do not parse are
    /// left unchanged and reported as `Err`.
    pub fn write(self, c: &mut Character, raw: &str) -> Result<(), std::num::ParseIntError> {
        let raw_num = raw.trim();
        match self {
            Field::Name => c.name = raw.to_string(),
            Field::Race => c.race = raw.to_string(),
            Field::Class => c.class = raw.to_string(),
            Field::Background => c.background = raw.to_string(),
            Field::Level => c.level = raw_num.parse()?,
            Field::Strength => c.abilities.strength = raw_num.parse()?,
            Field::Dexterity => c.abilities.dexterity = raw_num.parse()?,
            Field::Constitution => c.abilities.constitution = raw_num.parse()?,
            Field::Intelligence => c.abilities.intelligence = raw_num.parse()?,
            Field::Wisdom => c.abilities.wisdom = raw_num.parse()?,
            Field::Charisma => c.abilities.charisma = raw_num.parse()?,
            Field::Copper => c.currency.cp = raw_num.parse()?,
            Field::Silver => c.currency.sp = raw_num.parse()?,
            Field::Electrum => c.currency.ep = raw_num.parse()?,
            Field::Gold => c.currency.gp = raw_num.parse()?,
            Field::Platinum => c.currency.pp = raw_num.parse()?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_wrap() {
        assert_eq!(Tab::BasicInfo.prev(), Tab::Currency);
        assert_eq!(Tab::Currency.next(), Tab::BasicInfo);
        assert_eq!(Tab::Equipment.next(), Tab::Weapons);
        assert_eq!(Tab::from_index(3), Some(Tab::Equipment));
        assert_eq!(Tab::from_index(9), None);
    }

    #[test]
    fn test_every_field_belongs_to_exactly_one_tab() {
        for field in Field::ALL {
            let owners = Tab::ALL
                .iter()
                .filter(|tab| tab.fields().contains(&field))
                .count();
            assert_eq!(owners, 1, "{:?}", field);
        }
        assert!(!Tab::Equipment.has_fields());
        assert!(Tab::Background.has_fields());
    }

    #[test]
    fn test_write_rejects_non_numeric() {
        let mut c = Character::default();
        assert!(Field::Level.write(&mut c, "three").is_err());
        assert_eq!(c.level, 1);
        assert!(Field::Gold.write(&mut c, "-5").is_err());
        assert_eq!(c.currency.gp, 15);
        Field::Strength.write(&mut c, " 18 ").unwrap();
        assert_eq!(c.abilities.strength, 18);
        assert_eq!(Field::Strength.read(&c), "18");
    }
}
