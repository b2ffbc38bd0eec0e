use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::app::App;
use crate::tui::header::{FrameFocus, HeaderEdit};
use crate::tui::task::TaskFocus;
use crate::tui::task_list::{Mode, TaskList};
use crate::util::unicode::{display_width, truncate_to_width};

/// Indent of expansion lines, lining them up under the label text
const EXPAN_PREFIX: &str = "   - ";

/// Render one list in a bordered box: name on the top border, group on the
/// bottom border, tasks inside. Returns where the terminal cursor belongs
/// when this list is focused and editing.
pub fn render_task_list(
    frame: &mut Frame,
    app: &App,
    list: &TaskList,
    focused: bool,
    area: Rect,
) -> Option<Position> {
    let editing = focused && list.mode() == Mode::Edit;
    let border_color = match (focused, list.mode()) {
        (false, _) => app.theme.dim,
        (true, Mode::Navigate) => app.theme.border_navigate,
        (true, Mode::Edit) => app.theme.border_edit,
    };
    let width = area.width.saturating_sub(2) as usize;

    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .add_modifier(Modifier::BOLD);
    let title = header_line(list.title(), title_style, width);
    let group = header_line(list.group_foot(), Style::default().fg(app.theme.dim), width);

    let block = Block::bordered()
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_bottom(group);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let styles = &app.tag_styles;
    let mut lines: Vec<Line> = Vec::new();
    // Row and cell offset of the text field holding focus
    let mut focus_row: Option<(usize, usize)> = None;

    for (i, task) in list.tasks().iter().enumerate() {
        let is_focused_task = focused && list.focus_position() == Some(i);
        let tag_focused = is_focused_task && task.focus() == TaskFocus::Tag;

        let caption = task.tag.caption(styles);
        let caption_width = display_width(&caption.content);
        if tag_focused {
            focus_row = Some((lines.len(), caption_width + task.tag.edit().cursor_col()));
        }
        let mut spans = vec![
            caption,
            Span::styled(
                task.tag.text().to_string(),
                task.tag.label_style(styles, tag_focused),
            ),
        ];
        if task.is_delete_pending() {
            spans.push(Span::styled(
                "  delete? (y/n)",
                Style::default()
                    .fg(app.theme.red)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));

        if task.show_expan() {
            let edits = task.expan.edits();
            for (j, line) in edits.iter().enumerate() {
                let line_focused = is_focused_task
                    && task.focus() == TaskFocus::Expan
                    && edits.focus_position() == Some(j);
                if line_focused {
                    focus_row = Some((lines.len(), EXPAN_PREFIX.len() + line.cursor_col()));
                }
                let style = if line_focused {
                    styles.focus
                } else {
                    Style::default().fg(app.theme.dim)
                };
                lines.push(Line::from(vec![
                    Span::styled(EXPAN_PREFIX, Style::default().fg(app.theme.dim)),
                    Span::styled(line.text().to_string(), style),
                ]));
            }
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            " No tasks",
            Style::default().fg(app.theme.dim),
        )));
    }

    // Keep the focused row on screen
    let height = inner.height as usize;
    let scroll = match focus_row {
        Some((row, _)) if height > 0 && row >= height => row + 1 - height,
        _ => 0,
    };
    frame.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), inner);

    if !editing {
        return None;
    }
    let pos = match list.frame_focus() {
        FrameFocus::Title => Position::new(
            area.x + 1 + list.title().edit_field().cursor_col() as u16,
            area.y,
        ),
        FrameFocus::Footer => Position::new(
            area.x
                + 1
                + (list.group_foot().caption().len() + list.group_foot().edit_field().cursor_col())
                    as u16,
            area.bottom().saturating_sub(1),
        ),
        FrameFocus::Body => {
            let (row, col) = focus_row?;
            Position::new(inner.x + col as u16, inner.y + (row - scroll) as u16)
        }
    };
    // Never place the cursor outside this list's box
    Some(Position::new(
        pos.x.min(area.right().saturating_sub(2)),
        pos.y,
    ))
}

/// A header shown on the border. The edit field holds the committed value
/// between edits and the live text during one.
fn header_line<'a>(header: &HeaderEdit, style: Style, width: usize) -> Line<'a> {
    let caption = header.caption();
    let budget = width.saturating_sub(caption.len());
    Line::from(vec![
        Span::raw(caption),
        Span::styled(truncate_to_width(header.text(), budget), style),
    ])
}
