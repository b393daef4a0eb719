//! Transient user notifications.
//!
//! Each entry lives for [`NOTIFICATION_TTL_MS`] from its own insertion time.
//! Expiry of one entry never depends on another.

use serde::Serialize;

use crate::ids::NotificationId;

pub const NOTIFICATION_TTL_MS: i64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn expires_at_ms(&self) -> i64 {
        self.id.inserted_at_ms + NOTIFICATION_TTL_MS
    }

    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms()
    }
}

/// Ordered, append-only queue of notifications.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
    /// Strictly increasing; never tied to the clock.
    next_seq: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now_ms: i64,
    ) -> NotificationId {
        let id = NotificationId::new(now_ms, self.next_seq);
        self.next_seq += 1;
        self.entries.push(Notification {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Removes one entry. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    /// Entries still within their window, oldest first.
    pub fn visible(&self, now_ms: i64) -> Vec<Notification> {
        self.entries
            .iter()
            .filter(|n| !n.is_expired(now_ms))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
