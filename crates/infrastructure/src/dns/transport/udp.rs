//! UDP transport for upstream queries (RFC 1035 §4.2.1).
//!
//! Messages travel unframed. A reply whose id does not match the query is
//! discarded and the read continues until the deadline.

use super::{io_error, message_id, timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use relay_dns_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let server = self.server_addr;
        let query_id = message_id(message_bytes);

        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| io_error(server, "failed to bind UDP socket", e))?;
        socket
            .connect(server)
            .await
            .map_err(|e| io_error(server, "failed to connect UDP socket", e))?;

        let bytes_sent = tokio::time::timeout(timeout, socket.send(message_bytes))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| io_error(server, "failed to send UDP query", e))?;

        debug!(server = %server, bytes_sent, "UDP query sent");

        let deadline = Instant::now() + timeout;
        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let bytes_received = tokio::time::timeout_at(deadline, socket.recv(&mut recv_buf))
                .await
                .map_err(|_| timeout_error(server))?
                .map_err(|e| io_error(server, "failed to receive UDP response", e))?;

            let reply = &recv_buf[..bytes_received];
            if message_id(reply) != query_id {
                warn!(
                    server = %server,
                    expected = ?query_id,
                    received = ?message_id(reply),
                    "Discarding UDP response with mismatched id"
                );
                continue;
            }

            debug!(server = %server, bytes_received, "UDP response received");

            return Ok(TransportResponse {
                bytes: Bytes::copy_from_slice(reply),
                protocol_used: "UDP",
            });
        }
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
