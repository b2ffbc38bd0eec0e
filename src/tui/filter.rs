use crossterm::event::{KeyCode, KeyEvent};
use regex::Regex;

use super::task_list::TaskList;
use super::text_edit::TextEdit;

pub const FILTER_CAPTION: &str = "Filter= ";

/// Result of a key sent to the filter prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Keep the prompt open
    Continue,
    /// `enter` or `esc`: close the prompt
    Clear,
}

/// The `/` prompt narrowing the board to lists whose name or group matches
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    edit: TextEdit,
}

impl ListFilter {
    /// Open the prompt pre-filled with the current query
    pub fn new(query: &str) -> Self {
        ListFilter {
            edit: TextEdit::new(query),
        }
    }

    pub fn query(&self) -> &str {
        self.edit.text()
    }

    pub fn edit_field(&self) -> &TextEdit {
        &self.edit
    }

    pub fn insert_str(&mut self, text: &str) {
        self.edit.insert_str(text);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptOutcome {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => PromptOutcome::Clear,
            _ => {
                self.edit.handle_key(key);
                PromptOutcome::Continue
            }
        }
    }
}

/// Case-insensitive literal matcher for list names and groups.
/// An empty query matches everything.
pub fn query_regex(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(query))).ok()
}

pub fn list_matches(list: &TaskList, re: Option<&Regex>) -> bool {
    re.is_none_or(|re| re.is_match(list.name()) || re.is_match(list.group()))
}
