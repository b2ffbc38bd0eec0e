use std::path::PathBuf;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Config, TaskListRecord, TaskRecord};
use crate::tui::app::App;
use crate::tui::task_list::TaskList;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

pub fn task(id: &str, tag: &str, expan: &[&str]) -> TaskRecord {
    TaskRecord {
        id: id.into(),
        tag: tag.into(),
        expan: expan.iter().map(|s| s.to_string()).collect(),
    }
}

/// A board over the given records, saving nowhere useful
pub fn app_with(records: Vec<TaskListRecord>) -> App {
    let lists = records
        .iter()
        .map(|r| TaskList::from_record(r).unwrap())
        .collect();
    App::new(lists, &Config::default(), PathBuf::from("/tmp/tudo-test/lists.json"))
}

/// One list "chores" in group "home": an open task with one expansion line
/// and a struck task.
pub fn sample_app() -> App {
    app_with(vec![TaskListRecord {
        name: "chores".into(),
        group: "home".into(),
        id: "l1".into(),
        tasks: vec![
            task("a", "obuy milk", &["oat"]),
            task("b", "xwater plants", &[]),
        ],
    }])
}
