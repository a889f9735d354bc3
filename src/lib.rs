//! shimo_mirror - Mirror a Shimo workspace onto the local filesystem.
//!
//! This library discovers the full folder hierarchy of a remote document
//! workspace, then walks it and downloads every document through the
//! workspace's export pipeline:
//! - Recursive discovery builds an in-memory tree and counts documents
//! - Each document is exported server-side, polled to completion, and
//!   written under a local path mirroring the remote folder titles
//! - A running traversal can be paused and resumed between folders
//!
//! # Example
//!
//! ```no_run
//! use shimo_mirror::{Mirror, RetryPolicy, RunConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = RunConfig {
//!         session: "your_shimo_sid".to_string(),
//!         ..RunConfig::default()
//!     };
//!     let (mut mirror, _pause) = Mirror::new(config, RetryPolicy::default());
//!
//!     mirror.check_credential().await?;
//!     let summary = mirror.run().await?;
//!     println!("downloaded {} documents", summary.discovered);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod mirror;
pub mod models;
pub mod pause;
pub mod paths;
pub mod progress;
pub mod transport;
pub mod traverse;
pub mod tree;

// Re-exports for convenience
pub use client::{Endpoints, WorkspaceClient};
pub use config::{ExportFormat, RetryPolicy, RunConfig};
pub use download::Downloader;
pub use error::{MirrorError, Result};
pub use mirror::{Mirror, RunSummary};
pub use models::{DirectoryNode, EntryKind, FileEntry};
pub use pause::{pause_channel, PauseHandle, PauseSignal};
pub use progress::{LogSink, ProgressSink};
pub use transport::Transport;
pub use traverse::Traverser;
pub use tree::TreeBuilder;
