//! Key-event resolution.
//!
//! Raw `crossterm` key events are translated into an [`Action`] exactly
//! once, here, at the input boundary. Downstream code dispatches on the
//! action and never re-inspects key codes, so a key can only ever mean one
//! thing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything a single keystroke can ask the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Insert a printable character at the cursor.
    InsertChar(char),
    /// Delete the character before the cursor.
    DeleteBackward,
    MoveLeft,
    MoveRight,
    /// Recall the previous (older) history entry.
    HistoryOlder,
    /// Recall the next (newer) history entry.
    HistoryNewer,
    /// Pan the scrollback one row toward older output.
    ScrollUp,
    /// Pan the scrollback one row toward newer output.
    ScrollDown,
    /// Discard the current line.
    CancelLine,
    /// Submit the current line for execution.
    Submit,
    /// End the session.
    Quit,
    /// Ignored key (function keys, unbound chords, key releases).
    None,
}

/// Resolve a key event to its action.
///
/// Bindings: printable ASCII inserts, Backspace deletes, Left/Right move
/// the cursor, Up/Down browse history, PageUp/PageDown pan the scrollback,
/// Esc clears the line, Enter submits, Ctrl+Q quits. Anything else is
/// ignored rather than treated as an error.
pub fn resolve(event: &KeyEvent) -> Action {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    match event.code {
        KeyCode::Char('q') if ctrl => Action::Quit,
        // Only plain printable ASCII goes into the line buffer.
        KeyCode::Char(c) if !ctrl && !alt && (' '..='~').contains(&c) => Action::InsertChar(c),
        KeyCode::Backspace => Action::DeleteBackward,
        KeyCode::Left => Action::MoveLeft,
        KeyCode::Right => Action::MoveRight,
        KeyCode::Up => Action::HistoryOlder,
        KeyCode::Down => Action::HistoryNewer,
        KeyCode::PageUp => Action::ScrollUp,
        KeyCode::PageDown => Action::ScrollDown,
        KeyCode::Esc => Action::CancelLine,
        KeyCode::Enter => Action::Submit,
        _ => Action::None,
    }
}
