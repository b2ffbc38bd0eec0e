use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::record::{RecordError, TaskListRecord};

/// Error type for reading and writing the data file
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("malformed data file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("list {list:?}: {source}")]
    InvalidRecord { list: String, source: RecordError },
}

/// Load every list record from `path`. A missing file is an empty board.
/// Each record is validated before it is returned.
pub fn load_lists(path: &Path) -> Result<Vec<TaskListRecord>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path).map_err(|e| StoreError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let records: Vec<TaskListRecord> = serde_json::from_str(&text)?;
    for record in &records {
        record
            .validate()
            .map_err(|source| StoreError::InvalidRecord {
                list: record.name.clone(),
                source,
            })?;
    }
    Ok(records)
}

/// Write every list record to `path` as pretty JSON
pub fn save_lists(path: &Path, records: &[TaskListRecord]) -> Result<(), StoreError> {
    let mut content = serde_json::to_string_pretty(records)?;
    content.push('\n');
    let write_err = |e| StoreError::WriteError {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(write_err)?;
    }
    atomic_write(path, content.as_bytes()).map_err(write_err)?;
    tracing::info!(path = %path.display(), lists = records.len(), "saved lists");
    Ok(())
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::TaskRecord;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample() -> Vec<TaskListRecord> {
        vec![TaskListRecord {
            name: "home".into(),
            group: "chores".into(),
            id: "4f1c".into(),
            tasks: vec![TaskRecord {
                id: "a1".into(),
                tag: "obuy milk".into(),
                expan: vec!["oat".into()],
            }],
        }]
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("lists.json");
        save_lists(&path, &sample()).unwrap();
        assert_eq!(load_lists(&path).unwrap(), sample());
    }

    #[test]
    fn missing_file_is_empty_board() {
        let dir = TempDir::new().unwrap();
        assert!(load_lists(&dir.path().join("none.json")).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lists.json");
        fs::write(&path, "[{\"name\": ").unwrap();
        assert!(matches!(load_lists(&path), Err(StoreError::Json(_))));
    }

    #[test]
    fn bad_marker_fails_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lists.json");
        let mut records = sample();
        records[0].tasks[0].tag = "hello".into();
        save_lists(&path, &records).unwrap();

        let err = load_lists(&path).unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidRecord {
                source: RecordError::InvalidMarker { marker: 'h', .. },
                ..
            }
        ));
        assert!(err.to_string().contains("home"));
    }
}
