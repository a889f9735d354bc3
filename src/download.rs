//! Export/download engine: one document at a time, four steps each.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::client::WorkspaceClient;
use crate::config::{ExportFormat, RetryPolicy, RunConfig};
use crate::error::{MirrorError, Result};
use crate::models::FileEntry;
use crate::paths::{resolve_collision, strip_blank};
use crate::progress::ProgressSink;

/// Drives one document through export, poll, fetch, and persist.
///
/// Strictly sequential: the engine never starts a second document before
/// the current one is fully written or has failed.
pub struct Downloader {
    client: WorkspaceClient,
    format: ExportFormat,
    remove_blank: bool,
    retry: RetryPolicy,
    sink: Arc<dyn ProgressSink>,
}

impl Downloader {
    pub fn new(
        client: WorkspaceClient,
        config: &RunConfig,
        retry: RetryPolicy,
        sink: Arc<dyn ProgressSink>,
    ) -> Self {
        Self {
            client,
            format: config.format,
            remove_blank: config.remove_blank,
            retry,
            sink,
        }
    }

    /// Export `entry` in the configured format and write the result to
    /// its resolved local path, stamping the export task id on the entry.
    pub async fn download_document(&self, entry: &mut FileEntry) -> Result<()> {
        self.sink.line(&format!("requesting export: {}", entry.id));
        let task_id = self.client.request_export(&entry.id).await?;
        self.sink.line(&format!("export task: {task_id}"));
        entry.task_id = Some(task_id.clone());

        let url = self.poll_until_ready(&task_id).await?;
        self.sink.line(&format!("download link ready: {url}"));

        let payload = self.client.download(&url).await?;
        let path = self.persist(entry, &payload).await?;
        self.sink.line(&format!("saved: {}", path.display()));
        Ok(())
    }

    /// Query the export task until it produces a download link, sleeping
    /// the poll interval between queries. Unbounded unless the policy
    /// configures a wall-clock timeout.
    async fn poll_until_ready(&self, task_id: &str) -> Result<String> {
        let started = Instant::now();
        loop {
            let progress = self.client.export_progress(task_id).await?;
            self.sink
                .line(&format!("export progress: {}%", progress.percent));

            if let Some(url) = progress.download_url {
                return Ok(url);
            }
            if let Some(limit) = self.retry.poll_timeout {
                if started.elapsed() >= limit {
                    return Err(MirrorError::PollTimeout {
                        task_id: task_id.to_string(),
                    });
                }
            }
            tokio::time::sleep(self.retry.poll_interval).await;
        }
    }

    /// Resolve the final local path and write the payload in a single
    /// operation, creating parent directories as needed. Blank removal
    /// applies before the collision probe; the probe itself runs against
    /// the filesystem at write time.
    async fn persist(&self, entry: &FileEntry, payload: &[u8]) -> Result<PathBuf> {
        let mut target = entry.path.clone();
        if self.remove_blank {
            target = strip_blank(&target);
        }

        let dir = target.parent().map(Path::to_path_buf).unwrap_or_default();
        if !dir.as_os_str().is_empty() {
            tokio::fs::create_dir_all(&dir)
                .await
                .map_err(|source| MirrorError::Persist {
                    path: dir.clone(),
                    source,
                })?;
        }

        let stem = target
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| entry.id.clone());
        let path = resolve_collision(&dir, &stem, self.format.extension());

        tokio::fs::write(&path, payload)
            .await
            .map_err(|source| MirrorError::Persist {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}
