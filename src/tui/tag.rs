use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::model::record::{Marker, RecordError, join_tag, split_tag};

use super::text_edit::TextEdit;
use super::theme::Theme;

/// Caption text for a tag: the index right-aligned in two cells, or `X`
/// once struck, followed by one separator space.
pub fn caption_text(index: usize, struck: bool) -> String {
    if struck {
        "X ".to_string()
    } else {
        format!("{index:>2} ")
    }
}

/// Styles for every visual state of a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagStyles {
    pub index: Style,
    pub index_struck: Style,
    pub text: Style,
    pub text_struck: Style,
    pub focus: Style,
    pub focus_struck: Style,
}

impl TagStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        let strike = Modifier::CROSSED_OUT;
        let text = Style::default().fg(theme.text);
        let focus = Style::default()
            .fg(theme.text_bright)
            .add_modifier(Modifier::BOLD);
        let index = Style::default().fg(theme.index);
        TagStyles {
            index,
            index_struck: Style::default().fg(theme.index_struck).add_modifier(strike),
            text,
            text_struck: text.add_modifier(strike),
            focus,
            focus_struck: focus.add_modifier(strike),
        }
    }

    /// Label style for a (focused, struck) pair
    pub fn label(&self, focused: bool, struck: bool) -> Style {
        match (focused, struck) {
            (false, false) => self.text,
            (false, true) => self.text_struck,
            (true, false) => self.focus,
            (true, true) => self.focus_struck,
        }
    }

    pub fn caption(&self, struck: bool) -> Style {
        if struck { self.index_struck } else { self.index }
    }
}

impl Default for TagStyles {
    fn default() -> Self {
        TagStyles::from_theme(&Theme::default())
    }
}

/// The indexed, editable label of one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTag {
    /// 1-based position in the owning list; assigned by the list
    index: usize,
    edit: TextEdit,
    strikethrough: bool,
}

impl TaskTag {
    /// Build a tag from its persisted form, e.g. `"obuy milk"`
    pub fn new(index: usize, raw: &str) -> Result<Self, RecordError> {
        let (marker, text) = split_tag(raw)?;
        Ok(TaskTag {
            index,
            edit: TextEdit::new(text),
            strikethrough: marker.is_struck(),
        })
    }

    /// A fresh, open tag with no text
    pub fn open(index: usize) -> Self {
        TaskTag {
            index,
            edit: TextEdit::default(),
            strikethrough: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn text(&self) -> &str {
        self.edit.text()
    }

    pub fn edit(&self) -> &TextEdit {
        &self.edit
    }

    pub fn edit_mut(&mut self) -> &mut TextEdit {
        &mut self.edit
    }

    pub fn is_struck(&self) -> bool {
        self.strikethrough
    }

    pub fn marker(&self) -> Marker {
        Marker::from_struck(self.strikethrough)
    }

    /// Persisted form: marker character + label text
    pub fn to_record_string(&self) -> String {
        join_tag(self.marker(), self.text())
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.edit.move_cursor(delta);
    }

    pub fn toggle_strike(&mut self) {
        self.strikethrough = !self.strikethrough;
    }

    pub fn caption_text(&self) -> String {
        caption_text(self.index, self.strikethrough)
    }

    pub fn caption(&self, styles: &TagStyles) -> Span<'static> {
        Span::styled(self.caption_text(), styles.caption(self.strikethrough))
    }

    pub fn label_style(&self, styles: &TagStyles, focused: bool) -> Style {
        styles.label(focused, self.strikethrough)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_tag_shows_padded_index() {
        let tag = TaskTag::new(2, "ohello").unwrap();
        assert!(!tag.is_struck());
        assert_eq!(tag.text(), "hello");
        assert_eq!(tag.caption_text(), " 2 ");
    }

    #[test]
    fn struck_tag_shows_x() {
        let mut tag = TaskTag::new(2, "ohello").unwrap();
        tag.toggle_strike();
        assert_eq!(tag.caption_text(), "X ");
        assert_eq!(tag.to_record_string(), "xhello");
    }

    #[test]
    fn two_digit_index_has_no_padding() {
        assert_eq!(caption_text(12, false), "12 ");
        assert_eq!(caption_text(12, true), "X ");
        assert_eq!(caption_text(7, false), " 7 ");
    }

    #[test]
    fn toggle_strike_twice_restores_caption_and_style() {
        let styles = TagStyles::default();
        let mut tag = TaskTag::new(3, "xdone").unwrap();
        let caption = tag.caption(&styles);
        let label = tag.label_style(&styles, true);

        tag.toggle_strike();
        assert_ne!(tag.caption(&styles), caption);
        tag.toggle_strike();

        assert_eq!(tag.caption(&styles), caption);
        assert_eq!(tag.label_style(&styles, true), label);
        assert!(tag.is_struck());
    }

    #[test]
    fn caption_follows_index_changes() {
        let mut tag = TaskTag::new(1, "oa").unwrap();
        tag.set_index(10);
        assert_eq!(tag.caption_text(), "10 ");
    }

    #[test]
    fn malformed_marker_is_rejected() {
        assert!(matches!(
            TaskTag::new(1, "hello"),
            Err(RecordError::InvalidMarker { marker: 'h', .. })
        ));
        assert_eq!(TaskTag::new(1, ""), Err(RecordError::EmptyTag));
    }

    #[test]
    fn styles_never_mix_states() {
        let styles = TagStyles::default();
        let struck = styles.label(false, true);
        let focused = styles.label(true, false);
        assert!(struck.add_modifier.contains(Modifier::CROSSED_OUT));
        assert!(!struck.add_modifier.contains(Modifier::BOLD));
        assert!(focused.add_modifier.contains(Modifier::BOLD));
        assert!(!focused.add_modifier.contains(Modifier::CROSSED_OUT));
        assert!(styles.caption(true).add_modifier.contains(Modifier::CROSSED_OUT));
        assert!(!styles.caption(false).add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn move_cursor_moves_label_cursor() {
        let mut tag = TaskTag::new(1, "oabc").unwrap();
        tag.move_cursor(-1);
        assert_eq!(tag.edit().cursor(), 2);
        tag.move_cursor(5);
        assert_eq!(tag.edit().cursor(), 3);
    }
}
