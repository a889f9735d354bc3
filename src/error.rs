//! Error types for the shimo_mirror crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while mirroring a workspace.
///
/// None of these are recovered above the transport's rate-limit retry:
/// any failure aborts the whole run and propagates to the caller.
#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("session credential rejected: {0}")]
    Credential(String),

    #[error("request to {uri} failed with status {status}")]
    Status { uri: String, status: u16 },

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to decode response payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("export request for {file_id} returned no task id")]
    ExportRejected { file_id: String },

    #[error("export task {task_id} did not finish within the poll timeout")]
    PollTimeout { task_id: String },

    #[error("failed to persist {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for MirrorError.
pub type Result<T> = std::result::Result<T, MirrorError>;
