//! Maps terminal events to core actions.
//!
//! While a tab with fields is being edited, printable keys are text. Everywhere
//! else single letters are commands.

use crate::core::action::Action;
use crate::core::state::App;
use crate::core::tab::Tab;
use crate::tui::event::TuiEvent;

pub fn action_for(event: &TuiEvent, app: &App) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Save => return Some(Action::Save),
        TuiEvent::Load => return Some(Action::Load),
        TuiEvent::Resize => return None,
        TuiEvent::Next => return Some(Action::Next),
        TuiEvent::Prev => return Some(Action::Prev),
        TuiEvent::Submit => return Some(Action::Commit),
        TuiEvent::Escape => return Some(Action::EnterView),
        _ => {}
    }

    if app.text_entry_active() {
        return match event {
            TuiEvent::InputChar(c) => Some(Action::Type(*c)),
            TuiEvent::Paste(text) => Some(Action::Paste(text.clone())),
            TuiEvent::Backspace => Some(Action::Erase),
            TuiEvent::FocusUp => Some(Action::FocusPrev),
            TuiEvent::FocusDown => Some(Action::FocusNext),
            _ => None,
        };
    }

    match event {
        TuiEvent::FocusUp => Some(Action::Prev),
        TuiEvent::FocusDown => Some(Action::Next),
        TuiEvent::InputChar(c) => command_for(*c),
        _ => None,
    }
}

fn command_for(c: char) -> Option<Action> {
    let action = match c {
        'q' => Action::Quit,
        'e' => Action::EnterEdit,
        'v' => Action::EnterView,
        's' => Action::Save,
        'l' => Action::Load,
        'a' => Action::AddSample,
        ' ' => Action::ToggleEquip,
        'i' => Action::ShowInventory,
        'w' => Action::ShowEquipped,
        'n' => Action::Next,
        'p' => Action::Prev,
        '1'..='9' => {
            let index = c.to_digit(10)? as usize - 1;
            Action::SelectTab(Tab::from_index(index)?)
        }
        _ => return None,
    };
    Some(action)
}
