//! # Input Staging
//!
//! Provisional text for every editable field. Keystrokes land here and only
//! reach the `Character` on an explicit commit, one tab at a time.

use std::collections::BTreeMap;

use log::warn;

use crate::core::character::Character;
use crate::core::tab::{Field, Tab};

/// Maximum characters a single field accepts.
pub const FIELD_CHAR_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staging {
    values: BTreeMap<Field, String>,
    /// Position within the active tab's field list.
    focus: usize,
}

/// Outcome of committing a tab's staged values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    pub written: Vec<Field>,
    /// Numeric fields whose text did not parse; the document kept its value.
    pub ignored: Vec<Field>,
}

impl Staging {
    pub fn from_character(character: &Character) -> Self {
        let values = Field::ALL
            .iter()
            .map(|&field| (field, field.read(character)))
            .collect();
        Self { values, focus: 0 }
    }

    /// Replaces every staged value with the document's current text.
    pub fn reload(&mut self, character: &Character) {
        *self = Self::from_character(character);
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn focused(&self, tab: Tab) -> Option<Field> {
        tab.fields().get(self.focus).copied()
    }

    pub fn focus_next(&mut self, tab: Tab) {
        let len = tab.fields().len();
        if len > 0 {
            self.focus = (self.focus + 1) % len;
        }
    }

    pub fn focus_prev(&mut self, tab: Tab) {
        let len = tab.fields().len();
        if len > 0 {
            self.focus = (self.focus.min(len - 1) + len - 1) % len;
        }
    }

    pub fn reset_focus(&mut self) {
        self.focus = 0;
    }

    /// Appends a character to the focused field. Returns false when the tab
    /// has no fields or the field is full.
    pub fn push(&mut self, tab: Tab, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        let Some(field) = self.focused(tab) else {
            return false;
        };
        let value = self.values.entry(field).or_default();
        if value.chars().count() >= FIELD_CHAR_LIMIT {
            return false;
        }
        value.push(c);
        true
    }

    /// Appends pasted text up to the field limit. Newlines are dropped.
    pub fn paste(&mut self, tab: Tab, text: &str) -> usize {
        text.chars().filter(|&c| self.push(tab, c)).count()
    }

    pub fn pop(&mut self, tab: Tab) -> bool {
        self.focused(tab)
            .and_then(|field| self.values.get_mut(&field))
            .and_then(String::pop)
            .is_some()
    }

    /// Copies the active tab's staged values into the document.
    pub fn commit(&self, tab: Tab, character: &mut Character) -> CommitReport {
        let mut report = CommitReport::default();
        for &field in tab.fields() {
            match field.write(character, self.value(field)) {
                Ok(()) => report.written.push(field),
                Err(e) => {
                    warn!(
                        "Ignoring staged {} value {:?}: {}",
                        field.label(),
                        self.value(field),
                        e
                    );
                    report.ignored.push(field);
                }
            }
        }
        report
    }
}
