//! File shares: upload descriptors, size policy and share records.

mod limits;
mod mime;
mod record;
mod upload;

pub use limits::{check_upload_size, format_size, MAX_UPLOAD_BYTES};
pub use mime::content_type_for;
pub use record::{FileShareRecord, PreviewKind};
pub use upload::FileUpload;
