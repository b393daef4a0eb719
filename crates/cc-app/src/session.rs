//! Session-local list of outstanding file shares.
//!
//! Entries stay until explicitly deleted; expiry is the backend's business.

use std::sync::{Mutex, MutexGuard, PoisonError};

use cc_core::file::FileShareRecord;

#[derive(Debug, Default)]
pub struct ShareSession {
    shares: Mutex<Vec<FileShareRecord>>,
}

impl ShareSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<FileShareRecord>> {
        self.shares.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, record: FileShareRecord) {
        self.lock().push(record);
    }

    /// Shares in upload order.
    pub fn list(&self) -> Vec<FileShareRecord> {
        self.lock().clone()
    }

    pub fn find(&self, code: &str) -> Option<FileShareRecord> {
        self.lock().iter().find(|r| r.code == code).cloned()
    }

    /// Explicit user delete. Returns the removed record.
    pub fn remove(&self, code: &str) -> Option<FileShareRecord> {
        let mut shares = self.lock();
        let index = shares.iter().position(|r| r.code == code)?;
        Some(shares.remove(index))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
