//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One event is fully processed before the next is read:
//!
//! ```text
//! draw → poll → keymap → update() → perform Effect → update(result)
//! ```
//!
//! Effects are file reads and writes, run inline. Their outcome is fed back
//! into the reducer as another action, so the status message is always set
//! by `core::action`.

mod component;
mod components;
mod event;
mod keymap;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::compendium::load_compendium;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::store;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Builds the session: starting sheet plus whatever reference data loads.
/// Unreadable reference files are reported and leave their collection empty.
fn build_app(config: &ResolvedConfig) -> App {
    let (compendium, errors) = load_compendium(&config.data_dir);
    let mut app = App::new(config.starting_character(), compendium);

    if let Some(first) = errors.first() {
        for e in &errors {
            eprintln!("Warning: {}", e);
            warn!("Reference data unavailable: {}", e);
        }
        app.status_message = format!("Reference data unavailable: {}", first);
    }
    app
}

/// Performs an effect's I/O and returns the action describing its outcome.
fn perform(effect: Effect, config: &ResolvedConfig) -> Option<Action> {
    match effect {
        Effect::None | Effect::Quit => None,
        Effect::SaveCharacter(character) => {
            Some(match store::save_character(&config.characters_dir, &character) {
                Ok(path) => Action::Saved {
                    path,
                    at: Local::now(),
                },
                Err(e) => {
                    warn!("Save failed: {}", e);
                    Action::StoreFailed(format!("Error saving character: {}", e))
                }
            })
        }
        Effect::LoadCharacter => Some(match store::load_first(&config.characters_dir) {
            Ok(Some(character)) => {
                info!("Loaded character {:?}", character.name);
                Action::Loaded(character)
            }
            Ok(None) => Action::NothingToLoad,
            Err(e) => {
                warn!("Load failed: {}", e);
                Action::StoreFailed(format!("Error loading character: {}", e))
            }
        }),
    }
}

/// Runs one action to completion, including any I/O it triggers.
/// Returns true when the session should end.
fn dispatch(app: &mut App, action: Action, config: &ResolvedConfig) -> bool {
    let effect = update(app, action);
    if effect == Effect::Quit {
        return true;
    }
    if let Some(result) = perform(effect, config) {
        // Store results never produce further effects
        update(app, result);
    }
    false
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = build_app(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app)) {
                ratatui::restore();
                return Err(e);
            }
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            let Some(action) = keymap::action_for(&event, &app) else {
                continue;
            };
            if dispatch(&mut app, action, &config) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Character editor shutting down");
    ratatui::restore();
    Ok(())
}
