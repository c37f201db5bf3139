use async_trait::async_trait;
use bytes::Bytes;
use relay_dns_domain::DomainError;
use std::sync::Arc;

/// Upstream reply, relayed to the client byte for byte.
#[derive(Debug, Clone)]
pub struct ForwardedResponse {
    pub bytes: Bytes,
    pub upstream: Arc<str>,
}

#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    /// Sends the client's query unchanged and returns the upstream's reply.
    ///
    /// Each write and each read is bounded by the configured upstream timeout.
    async fn forward(&self, query: &[u8]) -> Result<ForwardedResponse, DomainError>;
}
