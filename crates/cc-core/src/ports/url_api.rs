use async_trait::async_trait;

use crate::error::ShareResult;
use crate::url::{ResolveOutcome, ShortenRequest, ShortenResponse};

#[async_trait]
pub trait UrlApiPort: Send + Sync {
    async fn shorten(&self, request: &ShortenRequest) -> ShareResult<ShortenResponse>;

    /// Looks up where a short path points. A miss is `ResolveOutcome::NotFound`,
    /// only transport failures are errors.
    async fn resolve(&self, short_path: &str) -> ShareResult<ResolveOutcome>;
}
