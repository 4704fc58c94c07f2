use crossterm::event::KeyEvent;

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    MoveUp,
    MoveDown,
    /// Activate the item under the cursor
    Select,
    /// Close the open modal
    Close,
    ScrollDown,
    ScrollUp,
    ToggleHelp,
    ExitMode,
    None,
}

impl Action {
    pub fn description(&self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::FocusNext => "next component",
            Action::FocusPrev => "previous component",
            Action::MoveUp => "move up",
            Action::MoveDown => "move down",
            Action::Select => "click / toggle / open / play",
            Action::Close => "close modal",
            Action::ScrollDown => "scroll page down",
            Action::ScrollUp => "scroll page up",
            Action::ToggleHelp => "help",
            Action::ExitMode => "back",
            Action::None => "",
        }
    }
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    match app.mode {
        // Any key exits help
        Mode::Help => Action::ExitMode,
        Mode::Normal => app.keymap.lookup(key).copied().unwrap_or(Action::None),
    }
}
