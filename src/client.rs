//! Workspace API client: directory listings, export jobs, payload fetches.

use std::path::Path;

use crate::config::{ExportFormat, RetryPolicy, RunConfig};
use crate::error::{MirrorError, Result};
use crate::models::{
    DirectoryNode, EntryKind, ExportProgress, ExportResponse, FileEntry, ListEntry,
    TaskStatusResponse,
};
use crate::transport::Transport;

/// Listing entry kind that marks a subfolder.
const KIND_FOLDER: &str = "folder";

/// Listing entry kind that marks a document. Entries of any other kind
/// are dropped from listings.
const KIND_DOCUMENT: &str = "newdoc";

/// Endpoint set of the workspace API. The base is overridable so tests
/// can point the client at a local server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base: "https://shimo.im".to_string(),
        }
    }
}

impl Endpoints {
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn list_root(&self) -> String {
        format!("{}/lizard-api/files", self.base)
    }

    fn list_folder(&self, folder_id: &str) -> String {
        format!("{}/lizard-api/files?folder={}", self.base, folder_id)
    }

    fn export(&self, file_id: &str, format: ExportFormat) -> String {
        format!(
            "{}/lizard-api/office-gw/files/export?fileGuid={}&type={}",
            self.base,
            file_id,
            format.extension()
        )
    }

    fn export_progress(&self, task_id: &str) -> String {
        format!(
            "{}/lizard-api/office-gw/files/export/progress?taskId={}",
            self.base, task_id
        )
    }
}

/// Client for the four workspace operations: list children, request an
/// export, query export progress, download a payload.
#[derive(Clone)]
pub struct WorkspaceClient {
    transport: Transport,
    endpoints: Endpoints,
    retry: RetryPolicy,
    format: ExportFormat,
}

impl WorkspaceClient {
    pub fn new(config: &RunConfig, retry: RetryPolicy, endpoints: Endpoints) -> Self {
        Self {
            transport: Transport::new(config.session.clone(), retry.backoff),
            endpoints,
            retry,
            format: config.format,
        }
    }

    /// List the immediate children of a folder, partitioned into
    /// subfolders and documents. An empty `folder_id` addresses the
    /// workspace root.
    ///
    /// Each child's local path is `parent_path` joined with its title,
    /// fixed here regardless of any later collision resolution.
    pub async fn list_children(
        &self,
        parent_path: &Path,
        folder_id: &str,
    ) -> Result<(Vec<DirectoryNode>, Vec<FileEntry>)> {
        let uri = if folder_id.is_empty() {
            self.endpoints.list_root()
        } else {
            self.endpoints.list_folder(folder_id)
        };

        let body = self.transport.fetch(&uri, self.retry.listing_budget).await?;
        let entries: Vec<ListEntry> = serde_json::from_slice(&body)?;

        let mut subfolders = Vec::new();
        let mut documents = Vec::new();
        for entry in entries {
            match entry.kind.as_str() {
                KIND_FOLDER => subfolders.push(DirectoryNode {
                    entry: FileEntry {
                        id: entry.guid,
                        path: parent_path.join(&entry.name),
                        title: entry.name,
                        kind: EntryKind::Folder,
                        task_id: None,
                    },
                    subdirs: None,
                    documents: None,
                }),
                KIND_DOCUMENT => documents.push(FileEntry {
                    id: entry.guid,
                    path: parent_path.join(&entry.name),
                    title: entry.name,
                    kind: EntryKind::Document,
                    task_id: None,
                }),
                _ => {}
            }
        }

        Ok((subfolders, documents))
    }

    /// Ask the workspace to start exporting a document in the configured
    /// format. Returns the export task id.
    pub async fn request_export(&self, file_id: &str) -> Result<String> {
        let uri = self.endpoints.export(file_id, self.format);
        let body = self.transport.fetch(&uri, self.retry.export_budget).await?;
        let response: ExportResponse = serde_json::from_slice(&body)?;

        match response.task_id {
            Some(task_id) if !task_id.is_empty() => Ok(task_id),
            _ => Err(MirrorError::ExportRejected {
                file_id: file_id.to_string(),
            }),
        }
    }

    /// Query the progress of one export task. A single query, no loop;
    /// the download engine drives the polling.
    pub async fn export_progress(&self, task_id: &str) -> Result<ExportProgress> {
        let uri = self.endpoints.export_progress(task_id);
        let body = self.transport.fetch(&uri, self.retry.poll_budget).await?;
        let response: TaskStatusResponse = serde_json::from_slice(&body)?;

        let ready = response.status == 0 && !response.data.download_url.is_empty();
        Ok(ExportProgress {
            percent: response.data.progress,
            download_url: ready.then_some(response.data.download_url),
        })
    }

    /// Fetch the exported payload from its time-limited download link.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        self.transport.fetch(url, self.retry.download_budget).await
    }

    /// Hit the list-root endpoint and discard the body. Used by the
    /// pre-flight credential check.
    pub async fn probe_root(&self) -> Result<()> {
        self.transport
            .fetch(&self.endpoints.list_root(), self.retry.listing_budget)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.list_root(), "https://shimo.im/lizard-api/files");
        assert_eq!(
            endpoints.list_folder("f1"),
            "https://shimo.im/lizard-api/files?folder=f1"
        );
        assert_eq!(
            endpoints.export("abc", ExportFormat::Pdf),
            "https://shimo.im/lizard-api/office-gw/files/export?fileGuid=abc&type=pdf"
        );
        assert_eq!(
            endpoints.export_progress("t9"),
            "https://shimo.im/lizard-api/office-gw/files/export/progress?taskId=t9"
        );
    }

    #[test]
    fn test_endpoints_with_base() {
        let endpoints = Endpoints::with_base("http://127.0.0.1:9999");
        assert_eq!(
            endpoints.list_root(),
            "http://127.0.0.1:9999/lizard-api/files"
        );
    }
}
