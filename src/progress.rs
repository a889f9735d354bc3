//! Progress reporting boundary toward the presentation layer.

use tracing::info;

/// Sink for human-readable progress lines.
///
/// The core emits one line per notable step (discovered file, export
/// requested, payload saved, pause/resume). A presentation layer
/// implements this to surface the stream however it likes.
pub trait ProgressSink: Send + Sync {
    fn line(&self, message: &str);
}

/// Default sink: forwards every line to the tracing subscriber.
#[derive(Debug, Default)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn line(&self, message: &str) {
        info!("{message}");
    }
}
