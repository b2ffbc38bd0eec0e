use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent};

use crate::model::record::{RecordError, TaskRecord};

use super::focus::{Boundary, FocusList, step};
use super::tag::TaskTag;
use super::text_edit::TextEdit;

/// Sent by a task when the user confirms its deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub task_id: String,
}

/// Generate a fresh opaque id (32 lowercase hex chars)
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// A task's collapsible detail lines
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    lines: FocusList<TextEdit>,
    shown: bool,
}

impl Expansion {
    pub fn from_lines(lines: &[String]) -> Self {
        Expansion {
            lines: FocusList::from_vec(lines.iter().map(TextEdit::new).collect()),
            shown: false,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.text().to_string()).collect()
    }

    pub fn edits(&self) -> &FocusList<TextEdit> {
        &self.lines
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn open(&mut self) {
        self.shown = true;
    }

    pub fn close(&mut self) {
        self.shown = false;
    }

    pub fn toggle(&mut self) {
        self.shown = !self.shown;
    }

    /// Shown and holding at least one focusable line
    pub fn is_focusable(&self) -> bool {
        self.shown && !self.lines.is_empty()
    }

    pub fn move_focus(&mut self, delta: isize) -> Result<usize, Boundary> {
        self.lines.move_focus(delta)
    }

    pub fn focused_line_mut(&mut self) -> Option<&mut TextEdit> {
        self.lines.focused_mut()
    }

    /// Append an empty line and focus it
    pub fn push_line(&mut self) {
        self.lines.push(TextEdit::default());
        self.lines.focus_last();
    }
}

/// Which element of a task's own stack holds focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFocus {
    Tag,
    Expan,
}

/// One task: a tag line over an optional expansion.
#[derive(Debug)]
pub struct Task {
    id: String,
    pub tag: TaskTag,
    pub expan: Expansion,
    focus: TaskFocus,
    delete_pending: bool,
    delete_tx: Sender<DeleteRequest>,
}

impl Task {
    /// A fresh, empty, open task
    pub fn new(index: usize, delete_tx: Sender<DeleteRequest>) -> Self {
        Task {
            id: new_id(),
            tag: TaskTag::open(index),
            expan: Expansion::default(),
            focus: TaskFocus::Tag,
            delete_pending: false,
            delete_tx,
        }
    }

    pub fn from_record(
        index: usize,
        record: &TaskRecord,
        delete_tx: Sender<DeleteRequest>,
    ) -> Result<Self, RecordError> {
        Ok(Task {
            id: record.id.clone(),
            tag: TaskTag::new(index, &record.tag)?,
            expan: Expansion::from_lines(&record.expan),
            focus: TaskFocus::Tag,
            delete_pending: false,
            delete_tx,
        })
    }

    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: self.id.clone(),
            tag: self.tag.to_record_string(),
            expan: self.expan.lines(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn focus(&self) -> TaskFocus {
        self.focus
    }

    /// Number of focusable rows in this task's own stack
    fn stack_len(&self) -> usize {
        if self.expan.is_focusable() { 2 } else { 1 }
    }

    fn stack_position(&self) -> usize {
        match self.focus {
            TaskFocus::Tag => 0,
            TaskFocus::Expan => 1,
        }
    }

    /// Move within the stack (tag, expansion). Entering the expansion from
    /// above focuses its first line.
    pub fn move_focus(&mut self, delta: isize) -> Result<(), Boundary> {
        let target = step(self.stack_position(), delta, self.stack_len())?;
        if target == 1 && self.focus == TaskFocus::Tag {
            self.expan.lines.focus_first();
        }
        self.focus = if target == 0 {
            TaskFocus::Tag
        } else {
            TaskFocus::Expan
        };
        Ok(())
    }

    /// Move within the expansion lines
    pub fn move_expan_focus(&mut self, delta: isize) -> Result<(), Boundary> {
        if self.focus != TaskFocus::Expan {
            return Err(Boundary);
        }
        self.expan.move_focus(delta).map(|_| ())
    }

    /// Focus the first row, as when the list focus arrives from above
    pub fn enter_from_top(&mut self) {
        self.focus = TaskFocus::Tag;
    }

    /// Focus the last row, as when the list focus arrives from below
    pub fn enter_from_bottom(&mut self) {
        if self.expan.is_focusable() {
            self.focus = TaskFocus::Expan;
            self.expan.lines.focus_last();
        } else {
            self.focus = TaskFocus::Tag;
        }
    }

    pub fn show_expan(&self) -> bool {
        self.expan.is_shown()
    }

    pub fn open_expan(&mut self) {
        self.expan.open();
    }

    pub fn close_expan(&mut self) {
        self.expan.close();
        self.focus = TaskFocus::Tag;
    }

    pub fn toggle_expan(&mut self) {
        if self.expan.is_shown() {
            self.close_expan();
        } else {
            self.open_expan();
        }
    }

    pub fn toggle_strike(&mut self) {
        self.tag.toggle_strike();
    }

    /// The text field that currently holds focus
    pub fn focused_edit_mut(&mut self) -> &mut TextEdit {
        match self.focus {
            TaskFocus::Expan if self.expan.is_focusable() => match self.expan.lines.focused_mut() {
                Some(line) => line,
                None => self.tag.edit_mut(),
            },
            _ => self.tag.edit_mut(),
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.focused_edit_mut().move_cursor(delta);
    }

    /// Append an empty expansion line, open the expansion and focus the line
    pub fn new_entry(&mut self) {
        self.expan.push_line();
        self.expan.open();
        self.focus = TaskFocus::Expan;
    }

    pub fn prompt_delete(&mut self) {
        self.delete_pending = true;
    }

    pub fn is_delete_pending(&self) -> bool {
        self.delete_pending
    }

    /// Answer a pending delete prompt: `y` sends the delete request, any
    /// other key cancels.
    pub fn answer_delete_prompt(&mut self, key: KeyEvent) {
        self.delete_pending = false;
        if key.code == KeyCode::Char('y') {
            // The receiver lives in the owning list; a closed channel means
            // the list is gone and there is nothing left to delete from.
            let _ = self.delete_tx.send(DeleteRequest {
                task_id: self.id.clone(),
            });
        }
    }
}
