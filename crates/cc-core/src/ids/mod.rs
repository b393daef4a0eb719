//! ID type wrappers for type safety.

pub mod notification_id;
pub mod share_code;

pub use notification_id::NotificationId;
pub use share_code::{ShareCode, SHARE_CODE_LEN};
