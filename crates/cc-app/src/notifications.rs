//! Notification center: a queue plus one expiry timer per entry.

use std::collections::HashMap;
use std::sync::Arc;

use cc_core::ids::NotificationId;
use cc_core::notification::{Notification, NotificationKind, NotificationQueue, NOTIFICATION_TTL_MS};
use cc_core::ports::ClockPort;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Duration, Instant};
use tracing::debug;

pub struct NotificationCenter {
    queue: Arc<Mutex<NotificationQueue>>,
    timers: Arc<Mutex<HashMap<NotificationId, tokio::task::AbortHandle>>>,
    clock: Arc<dyn ClockPort>,
}

impl NotificationCenter {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            queue: Arc::new(Mutex::new(NotificationQueue::new())),
            timers: Arc::new(Mutex::new(HashMap::new())),
            clock,
        }
    }

    pub async fn success(&self, message: impl Into<String>) -> NotificationId {
        self.notify(message, NotificationKind::Success).await
    }

    pub async fn error(&self, message: impl Into<String>) -> NotificationId {
        self.notify(message, NotificationKind::Error).await
    }

    /// Appends a notification and schedules its removal
    /// [`NOTIFICATION_TTL_MS`] after insertion.
    pub async fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let deadline = Instant::now() + Duration::from_millis(NOTIFICATION_TTL_MS as u64);
        let id = self
            .queue
            .lock()
            .await
            .push(message, kind, self.clock.now_ms());

        // Held across spawn so the task cannot remove its entry before it is inserted.
        let mut timers_guard = self.timers.lock().await;
        let queue = Arc::clone(&self.queue);
        let timers = Arc::clone(&self.timers);
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            queue.lock().await.remove(id);
            timers.lock().await.remove(&id);
            debug!(notification_id = %id, "notification expired");
        });
        timers_guard.insert(id, handle.abort_handle());
        id
    }

    /// Manual dismissal. Returns `false` if the entry already expired.
    pub async fn dismiss(&self, id: NotificationId) -> bool {
        if let Some(handle) = self.timers.lock().await.remove(&id) {
            handle.abort();
        }
        self.queue.lock().await.remove(id)
    }

    pub async fn visible(&self) -> Vec<Notification> {
        self.queue.lock().await.visible(self.clock.now_ms())
    }
}
