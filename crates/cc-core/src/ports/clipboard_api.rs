use async_trait::async_trait;

use crate::clipboard::{
    ClipboardReceiveRequest, ClipboardReceiveResult, ClipboardSendRequest, ClipboardSendResult,
};
use crate::error::ShareResult;

#[async_trait]
pub trait ClipboardApiPort: Send + Sync {
    async fn send(&self, request: &ClipboardSendRequest) -> ShareResult<ClipboardSendResult>;

    async fn receive(&self, request: &ClipboardReceiveRequest)
        -> ShareResult<ClipboardReceiveResult>;
}
