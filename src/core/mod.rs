//! # Core Application Logic
//!
//! The character document, the slot allocator and the editor state machine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Character (document) │
//!                    │  • State (editor data)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │   Files    │
//!     │  Adapter   │                          │ store.rs + │
//!     │ (ratatui)  │                          │ compendium │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`character`]: The `Character` document and its serde shape
//! - [`allocator`]: Equip/unequip rules for body slots and hands
//! - [`tab`]: Tabs and the editable fields each one owns
//! - [`staging`]: Provisional field text, committed per tab
//! - [`cursor`]: List selection
//! - [`state`]: The `App` struct, all editor state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`compendium`]: Reference templates read from `srd_*.json`
//! - [`store`]: Character files on disk
//! - [`config`]: Settings hierarchy

pub mod action;
pub mod allocator;
pub mod character;
pub mod compendium;
pub mod config;
pub mod cursor;
pub mod samples;
pub mod staging;
pub mod state;
pub mod store;
pub mod tab;
