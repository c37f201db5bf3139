//! TCP transport for upstream queries (RFC 1035 §4.2.2).
//!
//! One fresh connection per query; messages carry a two-byte length prefix.

use super::{io_error, message_id, timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use relay_dns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn connect(&self, timeout: Duration) -> Result<TcpStream, DomainError> {
        let server = self.server_addr;

        let stream = tokio::time::timeout(timeout, TcpStream::connect(server))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| io_error(server, "connection failed", e))?;

        stream
            .set_nodelay(true)
            .map_err(|e| io_error(server, "failed to set TCP_NODELAY", e))?;

        Ok(stream)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let server = self.server_addr;
        let mut stream = self.connect(timeout).await?;

        tokio::time::timeout(timeout, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| io_error(server, "failed to send TCP query", e))?;

        debug!(server = %server, message_len = message_bytes.len(), "TCP query sent");

        let response_bytes = tokio::time::timeout(timeout, read_with_length_prefix(&mut stream))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| io_error(server, "failed to read TCP response", e))?;

        if message_id(&response_bytes) != message_id(message_bytes) {
            return Err(DomainError::InvalidResponse(format!(
                "TCP response from {} has mismatched id",
                server
            )));
        }

        debug!(server = %server, response_len = response_bytes.len(), "TCP response received");

        Ok(TransportResponse {
            bytes: Bytes::from(response_bytes),
            protocol_used: "TCP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

/// Writes one length-prefixed DNS message and flushes.
pub async fn send_with_length_prefix<S>(stream: &mut S, message_bytes: &[u8]) -> std::io::Result<()>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("DNS message too large: {} bytes", message_bytes.len()),
        )
    })?;

    stream.write_all(&length.to_be_bytes()).await?;
    stream.write_all(message_bytes).await?;
    stream.flush().await
}

/// Reads one length-prefixed DNS message.
pub async fn read_with_length_prefix<S>(stream: &mut S) -> std::io::Result<Vec<u8>>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await?;

    let message_len = u16::from_be_bytes(len_buf) as usize;

    let mut message = vec![0u8; message_len];
    stream.read_exact(&mut message).await?;

    Ok(message)
}
