//! Per-flow request lifecycle.
//!
//! Each flow owns one request at a time. A second submission while the
//! first is loading is rejected with [`ShareError::Busy`] and never reaches
//! the port. After [`Flow::unmount`], completions no longer touch the state.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use cc_core::error::{ShareError, ShareResult};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState<T> {
    Idle,
    Loading,
    Succeeded(T),
    /// User-facing message.
    Failed(String),
}

pub struct Flow<T> {
    name: &'static str,
    state: Mutex<FlowState<T>>,
    mounted: AtomicBool,
}

impl<T: Clone> Flow<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(FlowState::Idle),
            mounted: AtomicBool::new(true),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FlowState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> FlowState<T> {
        self.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.lock(), FlowState::Loading)
    }

    /// Whether the submit control of this flow is enabled.
    pub fn can_submit(&self) -> bool {
        self.is_mounted() && !self.is_loading()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// The view that owns this flow is gone.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    pub fn reset(&self) {
        *self.lock() = FlowState::Idle;
    }

    /// Runs `op` unless a request is already in flight.
    pub async fn run<Fut>(&self, op: Fut) -> ShareResult<T>
    where
        Fut: Future<Output = ShareResult<T>>,
    {
        {
            let mut state = self.lock();
            if matches!(*state, FlowState::Loading) {
                debug!(flow = self.name, "submission rejected while loading");
                return Err(ShareError::Busy);
            }
            *state = FlowState::Loading;
        }

        let mut guard = LoadingGuard {
            flow: self,
            armed: true,
        };
        let result = op.await;
        guard.armed = false;

        if !self.is_mounted() {
            debug!(flow = self.name, "late completion ignored after unmount");
            return result;
        }

        *self.lock() = match &result {
            Ok(value) => FlowState::Succeeded(value.clone()),
            Err(err) => FlowState::Failed(err.user_message()),
        };
        result
    }
}

/// Puts a flow back to `Idle` when its `run` future is dropped mid-request
/// (timeout, `select!`), so the next submission is not rejected as busy.
struct LoadingGuard<'a, T: Clone> {
    flow: &'a Flow<T>,
    armed: bool,
}

impl<T: Clone> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.flow.lock();
        if matches!(*state, FlowState::Loading) {
            debug!(flow = self.flow.name, "request cancelled");
            *state = FlowState::Idle;
        }
    }
}
