use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::tui::filter::{ListFilter, PromptOutcome};

/// Board-level commands: keys the focused list handed back
pub(super) fn handle_board_key(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (m, KeyCode::Char('s')) if m.contains(KeyModifiers::CONTROL) => {
            app.save_with_status();
        }
        (m, KeyCode::Char('q')) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        // Everything below only applies between edits
        _ if app.is_editing() => {}
        (_, KeyCode::Tab) => app.cycle_focus(1),
        (_, KeyCode::BackTab) => app.cycle_focus(-1),
        (_, KeyCode::Char('N')) => app.new_list(),
        (_, KeyCode::Char('/')) => {
            app.filter_prompt = Some(ListFilter::new(&app.filter_query));
        }
        (_, KeyCode::Char('Q')) => {
            if app.save_with_status() {
                app.should_quit = true;
            }
        }
        _ => {}
    }
}

/// Keys while the `/` prompt is open. The board narrows as the query is typed.
pub(super) fn handle_filter_prompt(app: &mut App, key: KeyEvent) {
    let Some(prompt) = &mut app.filter_prompt else {
        return;
    };
    if prompt.handle_key(key) == PromptOutcome::Clear {
        app.filter_query = prompt.query().to_string();
        app.filter_prompt = None;
        tracing::debug!(query = %app.filter_query, "filter applied");
    }
    app.clamp_focus();
}
