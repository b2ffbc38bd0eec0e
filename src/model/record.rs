use serde::{Deserialize, Serialize};

/// Completion marker carried as the first character of a persisted tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Open,
    Struck,
}

impl Marker {
    /// The character written in front of the label text
    pub fn marker_char(self) -> char {
        match self {
            Marker::Open => 'o',
            Marker::Struck => 'x',
        }
    }

    /// Parse a marker character
    pub fn from_marker_char(c: char) -> Option<Marker> {
        match c {
            'o' => Some(Marker::Open),
            'x' => Some(Marker::Struck),
            _ => None,
        }
    }

    pub fn from_struck(struck: bool) -> Marker {
        if struck { Marker::Struck } else { Marker::Open }
    }

    pub fn is_struck(self) -> bool {
        self == Marker::Struck
    }
}

/// Error type for malformed persisted records
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("empty tag: expected a leading 'o' or 'x' marker")]
    EmptyTag,
    #[error("invalid tag marker {marker:?} in {tag:?}: expected 'o' or 'x'")]
    InvalidMarker { marker: char, tag: String },
}

/// Split a persisted tag (`"obuy milk"`) into its marker and label text.
/// Exactly one marker character is stripped.
pub fn split_tag(raw: &str) -> Result<(Marker, &str), RecordError> {
    let mut chars = raw.chars();
    let first = chars.next().ok_or(RecordError::EmptyTag)?;
    let marker = Marker::from_marker_char(first).ok_or_else(|| RecordError::InvalidMarker {
        marker: first,
        tag: raw.to_string(),
    })?;
    Ok((marker, chars.as_str()))
}

/// Inverse of [`split_tag`]
pub fn join_tag(marker: Marker, text: &str) -> String {
    let mut tag = String::with_capacity(text.len() + 1);
    tag.push(marker.marker_char());
    tag.push_str(text);
    tag
}

/// One persisted task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    /// Marker character followed by the label text
    pub tag: String,
    /// Expansion lines, in display order
    pub expan: Vec<String>,
}

/// One persisted task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListRecord {
    pub name: String,
    pub group: String,
    pub id: String,
    pub tasks: Vec<TaskRecord>,
}

impl TaskListRecord {
    /// Check every task tag without building any UI state
    pub fn validate(&self) -> Result<(), RecordError> {
        for task in &self.tasks {
            split_tag(&task.tag)?;
        }
        Ok(())
    }
}
