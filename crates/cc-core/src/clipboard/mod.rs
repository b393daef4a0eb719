//! Text clipboard entries exchanged with `/api/clipboard/*`.

mod receive;
mod send;

pub use receive::{ClipboardReceiveRequest, ClipboardReceiveResult};
pub use send::{ClipboardSendRequest, ClipboardSendResult, ContentType};
