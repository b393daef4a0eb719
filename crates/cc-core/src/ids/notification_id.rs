use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Notification identifier derived from the insertion timestamp.
///
/// The sequence number is issued by the queue and never repeats, so ids stay
/// unique even if the wall clock steps back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId {
    pub inserted_at_ms: i64,
    pub seq: u64,
}

impl NotificationId {
    pub fn new(inserted_at_ms: i64, seq: u64) -> Self {
        Self {
            inserted_at_ms,
            seq,
        }
    }
}

impl Display for NotificationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.inserted_at_ms, self.seq)
    }
}
