//! Recursive discovery of the remote tree.

use std::sync::Arc;

use crate::client::WorkspaceClient;
use crate::error::Result;
use crate::models::DirectoryNode;
use crate::progress::ProgressSink;

/// Materializes the remote hierarchy into a [`DirectoryNode`] tree.
///
/// Discovery runs to completion before any download starts, so the full
/// tree shape and an accurate document count are known up front. The
/// recursion depth equals the remote folder depth; the remote hierarchy
/// is assumed acyclic.
pub struct TreeBuilder {
    client: WorkspaceClient,
    sink: Arc<dyn ProgressSink>,
}

impl TreeBuilder {
    pub fn new(client: WorkspaceClient, sink: Arc<dyn ProgressSink>) -> Self {
        Self { client, sink }
    }

    /// Populate `node` and every folder below it, in listing order, and
    /// return the number of documents discovered in the subtree.
    pub async fn build(&self, node: &mut DirectoryNode) -> Result<usize> {
        let (mut subdirs, documents) = self
            .client
            .list_children(&node.entry.path, &node.entry.id)
            .await?;

        let mut discovered = documents.len();
        for document in &documents {
            self.sink.line(&format!("file: {}", document.path.display()));
        }
        node.documents = Some(documents);

        for child in subdirs.iter_mut() {
            discovered += Box::pin(self.build(child)).await?;
        }
        node.subdirs = Some(subdirs);

        Ok(discovered)
    }
}
