//! The task-list container: owns the task sequence, routes every key
//! through its navigate/edit state machine, and converts to and from the
//! persisted record.

use std::sync::mpsc::{self, Receiver, Sender};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::record::{RecordError, TaskListRecord};

use super::focus::{Boundary, FocusList};
use super::header::{FrameFocus, HeaderEdit};
use super::task::{DeleteRequest, Task, TaskFocus, new_id};
use super::text_edit::TextEdit;

pub const DEFAULT_NAME: &str = "untitled";
pub const DEFAULT_GROUP: &str = "none";

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
}

/// One named, grouped list of tasks.
///
/// `tasks` is both the authoritative order and the walkable collection the
/// focus moves through, so the two can never drift apart.
#[derive(Debug)]
pub struct TaskList {
    name: String,
    group: String,
    id: String,
    tasks: FocusList<Task>,
    mode: Mode,
    frame_focus: FrameFocus,
    title: HeaderEdit,
    group_foot: HeaderEdit,
    delete_tx: Sender<DeleteRequest>,
    delete_rx: Receiver<DeleteRequest>,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    /// A fresh list with default name and group and a new id
    pub fn new() -> Self {
        Self::with_parts(
            DEFAULT_NAME.to_string(),
            DEFAULT_GROUP.to_string(),
            new_id(),
        )
    }

    fn with_parts(name: String, group: String, id: String) -> Self {
        let (delete_tx, delete_rx) = mpsc::channel();
        TaskList {
            title: HeaderEdit::title(&name),
            group_foot: HeaderEdit::group_foot(&group),
            name,
            group,
            id,
            tasks: FocusList::new(),
            mode: Mode::Navigate,
            frame_focus: FrameFocus::Body,
            delete_tx,
            delete_rx,
        }
    }

    /// Build a list from its record, numbering tasks in record order
    pub fn from_record(record: &TaskListRecord) -> Result<Self, RecordError> {
        let mut list = Self::with_parts(
            record.name.clone(),
            record.group.clone(),
            record.id.clone(),
        );
        let tasks = record
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| Task::from_record(i + 1, task, list.delete_tx.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        list.tasks = FocusList::from_vec(tasks);
        Ok(list)
    }

    /// Inverse of [`TaskList::from_record`]. Header text is exported as
    /// currently shown, like task labels, even mid-edit.
    pub fn export(&self) -> TaskListRecord {
        TaskListRecord {
            name: self.title.text().to_string(),
            group: self.group_foot.text().to_string(),
            id: self.id.clone(),
            tasks: self.tasks.iter().map(Task::to_record).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn frame_focus(&self) -> FrameFocus {
        self.frame_focus
    }

    pub fn title(&self) -> &HeaderEdit {
        &self.title
    }

    pub fn group_foot(&self) -> &HeaderEdit {
        &self.group_foot
    }

    pub fn tasks(&self) -> &FocusList<Task> {
        &self.tasks
    }

    pub fn focused_task(&self) -> Option<&Task> {
        self.tasks.focused()
    }

    pub fn focus_position(&self) -> Option<usize> {
        self.tasks.focus_position()
    }

    /// Focus the task at `index` (its tag row). Out of range is a no-op.
    pub fn focus_task(&mut self, index: usize) {
        if self.tasks.set_focus(index).is_ok()
            && let Some(task) = self.tasks.focused_mut()
        {
            task.enter_from_top();
        }
    }

    /// Handle one key. Keys the list does not use are handed back.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<KeyEvent> {
        let unhandled = match self.mode {
            Mode::Navigate => self.handle_navigate(key),
            Mode::Edit => self.handle_edit(key),
        };
        self.process_delete_requests();
        unhandled
    }

    fn handle_navigate(&mut self, key: KeyEvent) -> Option<KeyEvent> {
        if let Some(task) = self.tasks.focused_mut()
            && task.is_delete_pending()
        {
            // Chords like ctrl-s stay board commands and leave the prompt open
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                return Some(key);
            }
            task.answer_delete_prompt(key);
            return None;
        }

        let Some(c) = plain_char(key) else {
            return Some(key);
        };
        match c {
            'i' => {
                if self.tasks.focused().is_some() {
                    self.set_edit(true);
                }
            }
            'j' => self.move_focus(1),
            'k' => self.move_focus(-1),
            'J' => self.move_task(1),
            'K' => self.move_task(-1),
            'h' => self.move_cursor(-1),
            'l' => self.move_cursor(1),
            'e' => {
                if let Some(task) = self.tasks.focused_mut() {
                    task.toggle_expan();
                }
            }
            'E' => self.toggle_all_expansions(),
            'x' => {
                if let Some(task) = self.tasks.focused_mut() {
                    task.toggle_strike();
                }
            }
            'n' => self.edit_header(FrameFocus::Title),
            'g' => self.edit_header(FrameFocus::Footer),
            'D' => {
                if let Some(task) = self.tasks.focused_mut() {
                    task.prompt_delete();
                }
            }
            't' => self.insert_task(),
            'T' => {
                if let Some(task) = self.tasks.focused_mut() {
                    task.new_entry();
                    self.set_edit(true);
                }
            }
            _ => return Some(key),
        }
        None
    }

    fn handle_edit(&mut self, key: KeyEvent) -> Option<KeyEvent> {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.set_edit(false);
            if self.frame_focus != FrameFocus::Body {
                self.name = self.title.text().to_string();
                self.group = self.group_foot.text().to_string();
                self.frame_focus = FrameFocus::Body;
                tracing::info!(list = %self.id, name = %self.name, group = %self.group, "renamed list");
            }
            return None;
        }
        match self.active_edit_mut() {
            Some(edit) => {
                if edit.handle_key(key) {
                    None
                } else {
                    Some(key)
                }
            }
            None => Some(key),
        }
    }

    /// The text field receiving keys in edit mode
    pub fn active_edit_mut(&mut self) -> Option<&mut TextEdit> {
        match self.frame_focus {
            FrameFocus::Title => Some(self.title.edit_field_mut()),
            FrameFocus::Footer => Some(self.group_foot.edit_field_mut()),
            FrameFocus::Body => self.tasks.focused_mut().map(Task::focused_edit_mut),
        }
    }

    pub fn set_edit(&mut self, editing: bool) {
        self.mode = if editing { Mode::Edit } else { Mode::Navigate };
        tracing::debug!(list = %self.id, mode = ?self.mode, "mode changed");
    }

    fn edit_header(&mut self, which: FrameFocus) {
        self.frame_focus = match which {
            FrameFocus::Title => self.title.edit(),
            FrameFocus::Footer => self.group_foot.edit(),
            FrameFocus::Body => FrameFocus::Body,
        };
        self.set_edit(true);
    }

    /// Move focus by `delta` through the nested hierarchy: expansion lines
    /// first, then the task's own stack, then the list. A boundary at every
    /// level is a no-op.
    pub fn move_focus(&mut self, delta: isize) {
        let Some(task) = self.tasks.focused_mut() else {
            return;
        };
        let moved = match task.focus() {
            TaskFocus::Expan => task.move_expan_focus(delta),
            TaskFocus::Tag => Err(Boundary),
        };
        if moved.is_ok() || task.move_focus(delta).is_ok() {
            return;
        }
        if self.tasks.move_focus(delta).is_ok()
            && let Some(task) = self.tasks.focused_mut()
        {
            if delta > 0 {
                task.enter_from_top();
            } else {
                task.enter_from_bottom();
            }
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        if let Some(task) = self.tasks.focused_mut() {
            task.move_cursor(delta);
        }
    }

    fn toggle_all_expansions(&mut self) {
        let Some(shown) = self.tasks.focused().map(Task::show_expan) else {
            return;
        };
        for task in self.tasks.iter_mut() {
            if shown {
                task.close_expan();
            } else {
                task.open_expan();
            }
        }
    }

    /// Move the focused task by `trans` positions. The target is clamped to
    /// `0..=len` after removal, so moving past either end pins the task
    /// there.
    pub fn move_task(&mut self, trans: isize) {
        let Some(pos) = self.tasks.focus_position() else {
            return;
        };
        let old_index = self.tasks[pos].tag.index() as isize;
        let Some(task) = self.tasks.remove(pos) else {
            return;
        };
        let new_index = (old_index + trans - 1).clamp(0, self.tasks.len() as isize) as usize;
        let at = self.tasks.insert(new_index, task);
        let _ = self.tasks.set_focus(at);
        self.index_tasks();
        tracing::debug!(list = %self.id, from = pos, to = at, "moved task");
    }

    /// Insert a blank task after the focused one (or at the end) and edit it
    pub fn insert_task(&mut self) {
        let task = Task::new(0, self.delete_tx.clone());
        let at = match self.tasks.focus_position() {
            Some(pos) => pos + 1,
            None => self.tasks.len(),
        };
        let at = self.tasks.insert(at, task);
        let _ = self.tasks.set_focus(at);
        self.index_tasks();
        self.set_edit(true);
        tracing::info!(list = %self.id, position = at + 1, "inserted task");
    }

    /// Renumber every tag from 1 in sequence order
    pub fn index_tasks(&mut self) {
        for (i, task) in self.tasks.iter_mut().enumerate() {
            task.tag.set_index(i + 1);
        }
    }

    /// Remove the task with `task_id` and renumber the rest
    pub fn delete(&mut self, task_id: &str) -> Option<Task> {
        let pos = self.tasks.position(|t| t.id() == task_id)?;
        let task = self.tasks.remove(pos)?;
        self.index_tasks();
        tracing::info!(list = %self.id, task = %task_id, "deleted task");
        Some(task)
    }

    /// Apply delete requests sent by tasks since the last key
    pub fn process_delete_requests(&mut self) {
        while let Ok(request) = self.delete_rx.try_recv() {
            self.delete(&request.task_id);
        }
    }
}

/// The character of an unmodified (or shifted) key press
fn plain_char(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if (key.modifiers - KeyModifiers::SHIFT).is_empty() => Some(c),
        _ => None,
    }
}
