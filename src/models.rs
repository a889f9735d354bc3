//! Data models for the workspace API and the mirrored tree.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

/// Kind of a remote entry. `Root` exists only for the synthetic node the
/// discovery starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Root,
    Folder,
    Document,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Root => "root",
            EntryKind::Folder => "folder",
            EntryKind::Document => "document",
        }
    }
}

/// A remote document or folder reference.
///
/// `path` is derived once at discovery time by joining the title chain
/// from the root, before any collision resolution. `task_id` is stamped
/// when an export is requested for the entry.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub id: String,
    pub title: String,
    pub kind: EntryKind,
    pub path: PathBuf,
    pub task_id: Option<String>,
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kind: {} id: {} title: {} path: {}",
            self.kind.as_str(),
            self.id,
            self.title,
            self.path.display()
        )
    }
}

/// A folder in the mirrored tree.
///
/// Both child collections are `None` until the discovery call that
/// populates this node runs. `None` is distinct from `Some(vec![])`: the
/// former means no listing was ever recorded, the latter an empty folder.
/// The traversal preserves that distinction.
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    pub entry: FileEntry,
    pub subdirs: Option<Vec<DirectoryNode>>,
    pub documents: Option<Vec<FileEntry>>,
}

impl DirectoryNode {
    /// The synthetic root the discovery starts from. Its id is empty,
    /// which addresses the workspace root on the remote side.
    pub fn root(path: impl Into<PathBuf>) -> Self {
        Self {
            entry: FileEntry {
                id: String::new(),
                title: String::new(),
                kind: EntryKind::Root,
                path: path.into(),
                task_id: None,
            },
            subdirs: None,
            documents: None,
        }
    }
}

/// One entry of a directory listing response.
#[derive(Debug, Deserialize)]
pub struct ListEntry {
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Response to an export request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub task_id: Option<String>,
}

/// Response to an export-status query.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusResponse {
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub data: TaskData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskData {
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub download_url: String,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub cost_time: u64,
}

/// Progress of one export job, as seen by a single status query.
#[derive(Debug, Clone)]
pub struct ExportProgress {
    pub percent: u32,
    /// Set once the job has completed and a download link exists.
    pub download_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_entry_deserialize() {
        let json = r#"{"guid": "abc123", "name": "Notes", "type": "newdoc"}"#;
        let entry: ListEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.guid, "abc123");
        assert_eq!(entry.name, "Notes");
        assert_eq!(entry.kind, "newdoc");
    }

    #[test]
    fn test_list_entry_missing_fields_default() {
        let entry: ListEntry = serde_json::from_str(r#"{"type": "shortcut"}"#).unwrap();
        assert!(entry.guid.is_empty());
        assert!(entry.name.is_empty());
        assert_eq!(entry.kind, "shortcut");
    }

    #[test]
    fn test_export_response_with_task_id() {
        let json = r#"{"status": 0, "message": "", "taskId": "task-1"}"#;
        let response: ExportResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.task_id.as_deref(), Some("task-1"));
    }

    #[test]
    fn test_export_response_without_task_id() {
        let json = r#"{"status": -1, "message": "forbidden"}"#;
        let response: ExportResponse = serde_json::from_str(json).unwrap();
        assert!(response.task_id.is_none());
        assert_eq!(response.message, "forbidden");
    }

    #[test]
    fn test_task_status_complete() {
        let json = r#"{
            "status": 0,
            "code": 0,
            "data": {"progress": 100, "downloadUrl": "https://example.com/x.md", "fileSize": 12, "costTime": 3}
        }"#;
        let response: TaskStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, 0);
        assert_eq!(response.data.progress, 100);
        assert_eq!(response.data.download_url, "https://example.com/x.md");
    }

    #[test]
    fn test_task_status_incomplete_without_data() {
        let response: TaskStatusResponse = serde_json::from_str(r#"{"status": 1, "code": 0}"#).unwrap();
        assert_eq!(response.status, 1);
        assert_eq!(response.data.progress, 0);
        assert!(response.data.download_url.is_empty());
    }

    #[test]
    fn test_root_node() {
        let root = DirectoryNode::root("./download");
        assert!(root.entry.id.is_empty());
        assert_eq!(root.entry.kind, EntryKind::Root);
        assert!(root.subdirs.is_none());
        assert!(root.documents.is_none());
    }

    #[test]
    fn test_file_entry_display() {
        let entry = FileEntry {
            id: "abc".to_string(),
            title: "Notes".to_string(),
            kind: EntryKind::Document,
            path: PathBuf::from("download/Notes"),
            task_id: None,
        };
        let display = format!("{}", entry);
        assert!(display.contains("abc"));
        assert!(display.contains("Notes"));
        assert!(display.contains("document"));
    }
}
