use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

/// Single-line text field with a byte cursor kept on grapheme boundaries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEdit {
    text: String,
    cursor: usize,
}

impl TextEdit {
    /// A field holding `text` with the cursor at the end
    pub fn new(text: impl Into<String>) -> Self {
        let text = single_line(text.into());
        let cursor = text.len();
        TextEdit { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor position in terminal cells from the start of the text
    pub fn cursor_col(&self) -> usize {
        unicode::byte_offset_to_display_col(&self.text, self.cursor)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = single_line(text.into());
        self.cursor = self.text.len();
    }

    /// Shift the cursor by `delta` graphemes, clamped to the text
    pub fn move_cursor(&mut self, delta: isize) {
        self.cursor = unicode::step_graphemes(&self.text, self.cursor, delta);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' || c == '\r' {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text; newlines become spaces
    pub fn insert_str(&mut self, s: &str) {
        let clean = single_line(s.to_string());
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    /// Delete the grapheme before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    /// Delete from the start of the current word to the cursor
    pub fn delete_word_back(&mut self) {
        let start = unicode::word_boundary_left(&self.text, self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    /// Apply an editing key. Returns false if the key is not an editing key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Left if alt || ctrl => {
                self.cursor = unicode::word_boundary_left(&self.text, self.cursor);
            }
            KeyCode::Right if alt || ctrl => {
                self.cursor = unicode::word_boundary_right(&self.text, self.cursor);
            }
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            KeyCode::Char('a') if ctrl => self.move_home(),
            KeyCode::Char('e') if ctrl => self.move_end(),
            KeyCode::Char('w') if ctrl => self.delete_word_back(),
            KeyCode::Backspace if alt => self.delete_word_back(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Char(c) if !ctrl && !alt => self.insert_char(c),
            _ => return false,
        }
        true
    }
}

fn single_line(s: String) -> String {
    if s.contains(['\n', '\r']) {
        s.replace("\r\n", " ").replace(['\n', '\r'], " ")
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(edit: &mut TextEdit, code: KeyCode) -> bool {
        edit.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn new_puts_cursor_at_end() {
        let edit = TextEdit::new("hello");
        assert_eq!(edit.cursor(), 5);
        assert_eq!(edit.cursor_col(), 5);
    }

    #[test]
    fn move_cursor_is_clamped() {
        let mut edit = TextEdit::new("abc");
        edit.move_cursor(5);
        assert_eq!(edit.cursor(), 3);
        edit.move_cursor(-2);
        assert_eq!(edit.cursor(), 1);
        edit.move_cursor(-9);
        assert_eq!(edit.cursor(), 0);
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut edit = TextEdit::new("ac");
        edit.move_cursor(-1);
        assert!(press(&mut edit, KeyCode::Char('b')));
        assert_eq!(edit.text(), "abc");
        assert_eq!(edit.cursor(), 2);
    }

    #[test]
    fn backspace_and_delete_remove_whole_graphemes() {
        let mut edit = TextEdit::new("a🎉b");
        edit.move_cursor(-1);
        press(&mut edit, KeyCode::Backspace);
        assert_eq!(edit.text(), "ab");
        assert_eq!(edit.cursor(), 1);
        press(&mut edit, KeyCode::Delete);
        assert_eq!(edit.text(), "a");
        press(&mut edit, KeyCode::Delete);
        assert_eq!(edit.text(), "a");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut edit = TextEdit::new("x");
        edit.move_home();
        press(&mut edit, KeyCode::Backspace);
        assert_eq!(edit.text(), "x");
    }

    #[test]
    fn ctrl_w_deletes_previous_word() {
        let mut edit = TextEdit::new("buy oat milk");
        edit.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert_eq!(edit.text(), "buy oat ");
    }

    #[test]
    fn newlines_never_enter_the_buffer() {
        let mut edit = TextEdit::new("one\ntwo");
        assert_eq!(edit.text(), "one two");
        edit.insert_str("\r\nthree");
        assert_eq!(edit.text(), "one two three");
        edit.insert_char('\n');
        assert_eq!(edit.text(), "one two three");
    }

    #[test]
    fn unrelated_keys_are_not_handled() {
        let mut edit = TextEdit::new("x");
        assert!(!press(&mut edit, KeyCode::Up));
        assert!(!press(&mut edit, KeyCode::Enter));
        assert!(!edit.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
    }
}
