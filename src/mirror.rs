//! Top-level facade tying discovery, traversal, and download together.

use std::sync::Arc;

use crate::client::{Endpoints, WorkspaceClient};
use crate::config::{RetryPolicy, RunConfig};
use crate::download::Downloader;
use crate::error::{MirrorError, Result};
use crate::models::DirectoryNode;
use crate::pause::{pause_channel, PauseHandle, PauseSignal};
use crate::progress::{LogSink, ProgressSink};
use crate::traverse::Traverser;
use crate::tree::TreeBuilder;

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Documents discovered by the structure build, counted before any
    /// download started.
    pub discovered: usize,
}

/// One mirror run: configuration, client, progress sink, and the pause
/// receiver. Construction returns the paired [`PauseHandle`] for the
/// presentation layer; dropping the handle leaves the run uninterrupted.
pub struct Mirror {
    client: WorkspaceClient,
    config: RunConfig,
    retry: RetryPolicy,
    sink: Arc<dyn ProgressSink>,
    pause: PauseSignal,
}

impl Mirror {
    pub fn new(config: RunConfig, retry: RetryPolicy) -> (Self, PauseHandle) {
        Self::with_endpoints(config, retry, Endpoints::default())
    }

    /// Like [`Mirror::new`] with an explicit endpoint set, letting tests
    /// target a local server.
    pub fn with_endpoints(
        config: RunConfig,
        retry: RetryPolicy,
        endpoints: Endpoints,
    ) -> (Self, PauseHandle) {
        let client = WorkspaceClient::new(&config, retry, endpoints);
        let (handle, signal) = pause_channel();
        (
            Self {
                client,
                config,
                retry,
                sink: Arc::new(LogSink),
                pause: signal,
            },
            handle,
        )
    }

    /// Replace the default tracing-backed progress sink.
    pub fn set_sink(&mut self, sink: Arc<dyn ProgressSink>) {
        self.sink = sink;
    }

    /// Pre-flight credential check: an empty session token fails
    /// immediately, otherwise the list-root endpoint is probed and a
    /// status failure is reported as a credential rejection.
    pub async fn check_credential(&self) -> Result<()> {
        if self.config.session.is_empty() {
            return Err(MirrorError::Credential(
                "session token is empty".to_string(),
            ));
        }
        match self.client.probe_root().await {
            Ok(()) => Ok(()),
            Err(MirrorError::Status { status, .. }) => Err(MirrorError::Credential(format!(
                "workspace rejected the session token (status {status})"
            ))),
            Err(other) => Err(other),
        }
    }

    /// Discover the whole remote tree, then walk it and download every
    /// document. Any error aborts the run.
    ///
    /// This is a plain async fn so a presentation layer can spawn it as
    /// its own task and stay responsive while the run proceeds.
    pub async fn run(&mut self) -> Result<RunSummary> {
        let mut root = DirectoryNode::root(&self.config.root_path);

        let builder = TreeBuilder::new(self.client.clone(), self.sink.clone());
        let discovered = builder.build(&mut root).await?;
        self.sink.line(&format!("discovered {discovered} documents"));

        let downloader = Downloader::new(
            self.client.clone(),
            &self.config,
            self.retry,
            self.sink.clone(),
        );
        let mut traverser = Traverser::new(&downloader, self.sink.clone(), &mut self.pause);
        traverser.run(&mut root).await?;

        Ok(RunSummary { discovered })
    }
}
