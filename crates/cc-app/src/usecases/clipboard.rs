use std::sync::Arc;

use cc_core::clipboard::{
    ClipboardReceiveRequest, ClipboardReceiveResult, ClipboardSendRequest, ClipboardSendResult,
};
use cc_core::error::ShareResult;
use cc_core::ids::ShareCode;
use cc_core::ports::ClipboardApiPort;
use tracing::info;

/// Shares a text clipboard entry and returns its 4-digit code.
pub struct SendClipboard {
    api: Arc<dyn ClipboardApiPort>,
}

impl SendClipboard {
    pub fn from_ports(api: Arc<dyn ClipboardApiPort>) -> Self {
        Self { api }
    }

    #[tracing::instrument(
        name = "usecase.send_clipboard.execute",
        skip_all,
        fields(len = request.content.len(), confidential = request.is_confidential)
    )]
    pub async fn execute(&self, request: &ClipboardSendRequest) -> ShareResult<ClipboardSendResult> {
        request.validate()?;
        let result = self.api.send(request).await?;
        info!(code = %result.code, "clipboard content shared");
        Ok(result)
    }
}

/// Fetches a clipboard entry by code.
pub struct ReceiveClipboard {
    api: Arc<dyn ClipboardApiPort>,
}

impl ReceiveClipboard {
    pub fn from_ports(api: Arc<dyn ClipboardApiPort>) -> Self {
        Self { api }
    }

    #[tracing::instrument(name = "usecase.receive_clipboard.execute", skip_all, fields(code = %code))]
    pub async fn execute(
        &self,
        code: ShareCode,
        decryption_key: &str,
    ) -> ShareResult<ClipboardReceiveResult> {
        let request = ClipboardReceiveRequest::new(code, decryption_key);
        let result = self.api.receive(&request).await?;
        info!(confidential = result.is_confidential, "clipboard content received");
        Ok(result)
    }
}
