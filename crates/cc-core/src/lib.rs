//! # cc-core
//!
//! Core domain models and validation rules for the CloudClip client.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! the wire shapes of the sharing API, client-side validation, the share
//! code entry state machine, the notification queue, QR matrices and the
//! ports implemented by `cc-infra`.

pub mod clipboard;
pub mod code_entry;
pub mod config;
pub mod error;
pub mod file;
pub mod gating;
pub mod ids;
pub mod notification;
pub mod ports;
pub mod progress;
pub mod qr;
pub mod timestamp;
pub mod url;

// Re-export commonly used types at the crate root
pub use code_entry::CodeEntry;
pub use config::AppConfig;
pub use error::{ShareError, ShareResult, ValidationError, GENERIC_ERROR_MESSAGE};
pub use ids::{NotificationId, ShareCode};
pub use notification::{Notification, NotificationKind};
pub use progress::{ProgressReporter, UploadEvent};
