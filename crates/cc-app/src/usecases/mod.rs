//! Business logic use cases
//!
//! One use case per user action: validate locally, then call exactly one
//! port. Nothing here retries.

pub mod clipboard;
pub mod files;
pub mod qr;
pub mod urls;

pub use clipboard::{ReceiveClipboard, SendClipboard};
pub use files::{DownloadFile, LookupFile, UploadFile};
pub use qr::GenerateQr;
pub use urls::{ResolveShortUrl, ShortenUrl, ShortenedUrl};
