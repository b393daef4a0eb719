use async_trait::async_trait;
use cc_core::clipboard::{
    ClipboardReceiveRequest, ClipboardReceiveResult, ClipboardSendRequest, ClipboardSendResult,
};
use cc_core::error::ShareResult;
use cc_core::ports::ClipboardApiPort;

use super::error::{read_json, transport};
use super::HttpShareApi;

#[async_trait]
impl ClipboardApiPort for HttpShareApi {
    async fn send(&self, request: &ClipboardSendRequest) -> ShareResult<ClipboardSendResult> {
        let response = self
            .client
            .post(self.endpoint("/api/clipboard/send"))
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    async fn receive(
        &self,
        request: &ClipboardReceiveRequest,
    ) -> ShareResult<ClipboardReceiveResult> {
        let response = self
            .client
            .post(self.endpoint("/api/clipboard/receive"))
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }
}
