//! Pause/resume control for a running traversal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;

/// Create a linked handle/signal pair. The handle goes to the
/// presentation layer, the signal to the traversal.
pub fn pause_channel() -> (PauseHandle, PauseSignal) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        PauseHandle {
            tx,
            paused: Arc::new(AtomicBool::new(false)),
        },
        PauseSignal { rx },
    )
}

/// Two-state control object for requesting pause and resume.
///
/// The underlying channel carries bare toggle events: the first one
/// delivered pauses the traversal, the next resumes it, alternating.
/// The handle keeps the requested state so redundant requests are
/// dropped rather than delivered — a second `request_pause` without an
/// intervening resume emits nothing, and the paused traversal stays
/// blocked until a genuine resume arrives.
#[derive(Clone)]
pub struct PauseHandle {
    tx: mpsc::UnboundedSender<()>,
    paused: Arc<AtomicBool>,
}

impl PauseHandle {
    pub fn request_pause(&self) {
        if !self.paused.swap(true, Ordering::SeqCst) {
            let _ = self.tx.send(());
        }
    }

    pub fn request_resume(&self) {
        if self.paused.swap(false, Ordering::SeqCst) {
            let _ = self.tx.send(());
        }
    }
}

/// Receiving side, consumed at checkpoints in the traversal loop.
pub struct PauseSignal {
    rx: mpsc::UnboundedReceiver<()>,
}

impl PauseSignal {
    /// Non-blocking check for a pending toggle.
    pub(crate) fn try_toggle(&mut self) -> bool {
        self.rx.try_recv().is_ok()
    }

    /// Block until the next toggle. Returns immediately if every handle
    /// has been dropped, so an abandoned controller cannot strand a
    /// paused run.
    pub(crate) async fn wait_toggle(&mut self) {
        let _ = self.rx.recv().await;
    }
}
