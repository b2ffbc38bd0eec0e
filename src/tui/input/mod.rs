mod board;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::App;
use super::task_list::Mode;

use board::{handle_board_key, handle_filter_prompt};

/// Handle a key event: the filter prompt first, then the focused list,
/// then board-level commands for whatever the list hands back.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Clear any transient status message on keypress
    app.status_message = None;
    app.status_is_error = false;

    if app.filter_prompt.is_some() {
        handle_filter_prompt(app, key);
        return;
    }

    let unhandled = match app.focused_list_mut() {
        Some(list) => list.handle_key(key),
        None => Some(key),
    };
    // A committed rename can hide the list under the current filter
    app.clamp_focus();
    if let Some(key) = unhandled {
        handle_board_key(app, key);
    }
}

/// Handle a bracketed paste event. Only the text field being edited takes
/// pasted text.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(prompt) = &mut app.filter_prompt {
        prompt.insert_str(text);
        app.clamp_focus();
        return;
    }
    if let Some(list) = app.focused_list_mut()
        && list.mode() == Mode::Edit
        && let Some(edit) = list.active_edit_mut()
    {
        edit.insert_str(text);
    }
}
