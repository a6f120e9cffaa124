//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::character::Character;
use crate::core::compendium::Compendium;
use crate::core::state::{App, Mode};

/// Creates a test App around a blank sheet with no reference data.
pub fn test_app() -> App {
    App::new(Character::default(), Compendium::default())
}

/// Same as `test_app`, already in edit mode.
pub fn editing_app() -> App {
    let mut app = test_app();
    app.mode = Mode::Edit;
    app
}
