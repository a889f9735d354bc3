//! Depth-first traversal driving the download engine.

use std::sync::Arc;

use crate::download::Downloader;
use crate::error::Result;
use crate::models::DirectoryNode;
use crate::pause::PauseSignal;
use crate::progress::ProgressSink;

/// Walks a discovered tree pre-order, documents before subfolders, both
/// in discovery order, and downloads every document sequentially.
///
/// Before each folder's document list the traversal checks for a pending
/// pause toggle; when one is pending it blocks until the next toggle
/// arrives. No two downloads ever run concurrently.
pub struct Traverser<'a> {
    downloader: &'a Downloader,
    sink: Arc<dyn ProgressSink>,
    pause: &'a mut PauseSignal,
}

impl<'a> Traverser<'a> {
    pub fn new(
        downloader: &'a Downloader,
        sink: Arc<dyn ProgressSink>,
        pause: &'a mut PauseSignal,
    ) -> Self {
        Self {
            downloader,
            sink,
            pause,
        }
    }

    pub async fn run(&mut self, tree: &mut DirectoryNode) -> Result<()> {
        self.walk(tree).await
    }

    async fn walk(&mut self, node: &mut DirectoryNode) -> Result<()> {
        if let Some(documents) = node.documents.as_mut() {
            self.wait_if_paused().await;
            for document in documents.iter_mut() {
                self.sink.line(&format!("downloading {}", document.title));
                self.downloader.download_document(document).await?;
                self.sink
                    .line(&format!("finished {}: {}", document.title, document.path.display()));
            }
        }

        // A node whose subfolder listing was never recorded is a leaf,
        // distinct from a folder that listed zero subfolders.
        let Some(subdirs) = node.subdirs.as_mut() else {
            self.sink
                .line(&format!("{}: no subfolder listing recorded", node.entry.id));
            return Ok(());
        };

        for child in subdirs.iter_mut() {
            Box::pin(self.walk(child)).await?;
        }
        Ok(())
    }

    async fn wait_if_paused(&mut self) {
        if self.pause.try_toggle() {
            self.sink.line("download paused");
            self.pause.wait_toggle().await;
            self.sink.line("download resumed");
        }
    }
}
