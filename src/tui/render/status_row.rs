use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::filter::FILTER_CAPTION;
use crate::tui::task_list::Mode;
use crate::util::unicode::display_width;

const NAV_HINTS: &str = "j/k move  i edit  t new  x strike  e expand  D delete  / filter  Q save+quit";
const EDIT_HINTS: &str = "enter/esc done";

/// Render the bottom row: mode, then the filter prompt or a status message
/// or key hints, then the list position on the right. Returns the prompt
/// cursor while the filter prompt is open.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) -> Option<Position> {
    let (mode, mode_color) = if app.filter_prompt.is_some() {
        ("FILTER", app.theme.border_navigate)
    } else if app.is_editing() {
        ("EDIT", app.theme.border_edit)
    } else {
        ("NAV", app.theme.border_navigate)
    };
    let mode_label = format!(" {mode} ");
    let mode_width = display_width(&mode_label) as u16;

    let mut spans = vec![
        Span::styled(
            mode_label,
            Style::default()
                .fg(app.theme.background)
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    let mut cursor = None;
    if let Some(prompt) = &app.filter_prompt {
        spans.push(Span::styled(
            FILTER_CAPTION,
            Style::default().fg(app.theme.text_bright),
        ));
        spans.push(Span::styled(
            prompt.query().to_string(),
            Style::default().fg(app.theme.text),
        ));
        let col = mode_width as usize + 1 + FILTER_CAPTION.len() + prompt.edit_field().cursor_col();
        cursor = Some(Position::new(
            area.x + (col as u16).min(area.width.saturating_sub(1)),
            area.y,
        ));
    } else if let Some(msg) = &app.status_message {
        let color = if app.status_is_error {
            app.theme.red
        } else {
            app.theme.text
        };
        spans.push(Span::styled(msg.clone(), Style::default().fg(color)));
    } else {
        if !app.filter_query.is_empty() {
            spans.push(Span::styled(
                format!("{FILTER_CAPTION}{}  ", app.filter_query),
                Style::default().fg(app.theme.text),
            ));
        }
        if app.show_key_hints {
            let hints = match app.focused_list().map(|l| l.mode()) {
                Some(Mode::Edit) => EDIT_HINTS,
                _ => NAV_HINTS,
            };
            spans.push(Span::styled(hints, Style::default().fg(app.theme.dim)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let position = match app.visible().iter().position(|&i| i == app.focus) {
        Some(pos) => format!("list {}/{} ", pos + 1, app.visible().len()),
        None => String::new(),
    };
    let pos_width = display_width(&position) as u16;
    if !position.is_empty() && pos_width < area.width {
        let right = Rect::new(area.right() - pos_width, area.y, pos_width, 1);
        frame.render_widget(
            Paragraph::new(position).style(Style::default().fg(app.theme.dim)),
            right,
        );
    }

    cursor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskListRecord;
    use crate::tui::filter::ListFilter;
    use crate::tui::render::test_helpers::{TERM_W, app_with, render_to_string, sample_app};

    fn row(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, app, area);
        })
    }

    fn named(name: &str) -> TaskListRecord {
        TaskListRecord {
            name: name.into(),
            group: "g".into(),
            id: format!("{name}-id"),
            tasks: vec![],
        }
    }

    #[test]
    fn navigate_row_shows_mode_and_position() {
        let out = row(&sample_app());
        assert!(out.starts_with(" NAV "), "{out}");
        assert!(out.ends_with("list 1/1"), "{out}");
    }

    #[test]
    fn error_message_replaces_hints() {
        let mut app = sample_app();
        app.status_message = Some("save failed: denied".into());
        app.status_is_error = true;
        let out = row(&app);
        assert!(out.contains("save failed: denied"));
        assert!(!out.contains("j/k move"));
    }

    #[test]
    fn open_prompt_places_cursor_after_query() {
        let mut app = app_with(vec![named("work"), named("home")]);
        app.filter_prompt = Some(ListFilter::new("wo"));
        let mut pos = None;
        let out = render_to_string(TERM_W, 1, |frame, area| {
            pos = render_status_row(frame, &app, area);
        });
        assert!(out.starts_with(" FILTER  Filter= wo"), "{out}");
        // " FILTER " + " " + "Filter= " + "wo"
        assert_eq!(pos, Some(Position::new(8 + 1 + 8 + 2, 0)));
        assert!(out.ends_with("list 1/1"), "{out}");
    }

    #[test]
    fn hidden_focus_drops_position() {
        let mut app = app_with(vec![named("work")]);
        app.filter_query = "zzz".into();
        let out = row(&app);
        assert!(!out.contains("list "), "{out}");
        assert!(out.contains("Filter= zzz"));
    }
}
