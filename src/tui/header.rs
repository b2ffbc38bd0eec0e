use super::text_edit::TextEdit;

/// Which part of a list's frame holds structural focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFocus {
    Body,
    Title,
    Footer,
}

/// Editor for a list's name (title bar) or group (footer)
#[derive(Debug, Clone)]
pub struct HeaderEdit {
    place: FrameFocus,
    caption: &'static str,
    edit: TextEdit,
}

impl HeaderEdit {
    pub fn title(name: &str) -> Self {
        HeaderEdit {
            place: FrameFocus::Title,
            caption: "",
            edit: TextEdit::new(name),
        }
    }

    pub fn group_foot(group: &str) -> Self {
        HeaderEdit {
            place: FrameFocus::Footer,
            caption: "group: ",
            edit: TextEdit::new(group),
        }
    }

    pub fn caption(&self) -> &'static str {
        self.caption
    }

    pub fn text(&self) -> &str {
        self.edit.text()
    }

    pub fn edit_field(&self) -> &TextEdit {
        &self.edit
    }

    pub fn edit_field_mut(&mut self) -> &mut TextEdit {
        &mut self.edit
    }

    /// Start editing: cursor to the end, and return the frame part that
    /// must take structural focus.
    pub fn edit(&mut self) -> FrameFocus {
        self.edit.move_end();
        self.place
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_requests_own_frame_part() {
        let mut title = HeaderEdit::title("untitled");
        let mut foot = HeaderEdit::group_foot("none");
        assert_eq!(title.edit(), FrameFocus::Title);
        assert_eq!(foot.edit(), FrameFocus::Footer);
        assert_eq!(foot.caption(), "group: ");
    }

    #[test]
    fn edit_moves_cursor_to_end() {
        let mut title = HeaderEdit::title("groceries");
        title.edit_field_mut().move_home();
        title.edit();
        assert_eq!(title.edit_field().cursor(), "groceries".len());
    }
}
