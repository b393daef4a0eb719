//! Upload progress contract.
//!
//! Percentages never decrease, and exactly one terminal event
//! (`Completed` or `Failed`) closes the stream. Anything reported after the
//! terminal event is dropped.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEvent {
    Progress(u8),
    Completed,
    Failed(String),
}

impl UploadEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, UploadEvent::Progress(_))
    }
}

pub fn percent_of(transferred: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    let pct = (transferred.min(total) as u128 * 100) / total as u128;
    pct as u8
}

/// Sending side of an upload's progress stream.
///
/// Clones share state, so the transport can report bytes while the caller
/// keeps a handle for the terminal event.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    inner: Arc<Mutex<ReporterState>>,
}

#[derive(Debug)]
struct ReporterState {
    tx: Option<mpsc::UnboundedSender<UploadEvent>>,
    last_percent: Option<u8>,
    finished: bool,
}

impl ReporterState {
    fn emit(&self, event: UploadEvent) {
        if let Some(tx) = &self.tx {
            // Receiver may be gone if the view was closed mid-upload.
            let _ = tx.send(event);
        }
    }
}

impl ProgressReporter {
    fn with_sender(tx: Option<mpsc::UnboundedSender<UploadEvent>>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ReporterState {
                tx,
                last_percent: None,
                finished: false,
            })),
        }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<UploadEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::with_sender(Some(tx)), rx)
    }

    /// A reporter that records state but sends nowhere.
    pub fn silent() -> Self {
        Self::with_sender(None)
    }

    fn state(&self) -> MutexGuard<'_, ReporterState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Called on every transport progress event.
    pub fn bytes_sent(&self, transferred: u64, total: u64) {
        let mut state = self.state();
        if state.finished {
            return;
        }
        let pct = percent_of(transferred, total);
        let pct = state.last_percent.map_or(pct, |last| pct.max(last));
        state.last_percent = Some(pct);
        state.emit(UploadEvent::Progress(pct));
    }

    pub fn complete(&self) {
        self.finish(UploadEvent::Completed);
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.finish(UploadEvent::Failed(message.into()));
    }

    pub fn is_finished(&self) -> bool {
        self.state().finished
    }

    pub fn last_percent(&self) -> Option<u8> {
        self.state().last_percent
    }

    fn finish(&self, event: UploadEvent) {
        let mut state = self.state();
        if state.finished {
            return;
        }
        state.finished = true;
        state.emit(event);
    }
}
