use serde::Serialize;

use crate::model::record::{RecordError, TaskListRecord, split_tag};
use crate::tui::tag::caption_text;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub index: usize,
    pub text: String,
    pub struck: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expan: Vec<String>,
}

#[derive(Serialize)]
pub struct ListJson {
    pub id: String,
    pub name: String,
    pub group: String,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct CheckJson {
    pub valid: bool,
    pub lists: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn list_to_json(record: &TaskListRecord) -> Result<ListJson, RecordError> {
    let tasks = record
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let (marker, text) = split_tag(&task.tag)?;
            Ok(TaskJson {
                index: i + 1,
                text: text.to_string(),
                struck: marker.is_struck(),
                expan: task.expan.clone(),
            })
        })
        .collect::<Result<Vec<_>, RecordError>>()?;
    Ok(ListJson {
        id: record.id.clone(),
        name: record.name.clone(),
        group: record.group.clone(),
        tasks,
    })
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// Format one list the way the board shows it: a `name [group]` heading,
/// then one line per task with its caption, then its expansion lines.
pub fn format_list(record: &TaskListRecord) -> Result<String, RecordError> {
    let mut lines = vec![format!("{} [{}]", record.name, record.group)];
    for (i, task) in record.tasks.iter().enumerate() {
        let (marker, text) = split_tag(&task.tag)?;
        lines.push(format!("{}{}", caption_text(i + 1, marker.is_struck()), text));
        for line in &task.expan {
            lines.push(format!("   - {}", line));
        }
    }
    Ok(lines.join("\n"))
}
