pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Draw the whole board and the status row
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: lists | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let list_cursor = render_board(frame, app, chunks[0]);
    let prompt_cursor = status_row::render_status_row(frame, app, chunks[1]);

    if let Some(pos) = prompt_cursor.or(list_cursor) {
        frame.set_cursor_position(pos);
    }
}

/// Render the visible lists side by side. Returns the edit cursor position
/// of the focused list, if it is editing.
fn render_board(frame: &mut Frame, app: &App, area: Rect) -> Option<Position> {
    let visible = app.visible();
    if visible.is_empty() {
        let msg = if app.lists.is_empty() {
            " No lists. Press N to create one"
        } else {
            " No matching lists"
        };
        let empty = Paragraph::new(msg).style(Style::default().fg(app.theme.dim));
        frame.render_widget(empty, area);
        return None;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, visible.len() as u32);
            visible.len()
        ])
        .split(area);

    let mut cursor = None;
    for (&index, column) in visible.iter().zip(columns.iter()) {
        let focused = index == app.focus;
        let pos = list_view::render_task_list(frame, app, &app.lists[index], focused, *column);
        if focused {
            cursor = pos;
        }
    }
    cursor
}
