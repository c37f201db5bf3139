pub mod resolver;
pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use bytes::Bytes;
use relay_dns_domain::{DomainError, UpstreamProtocol};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Bytes,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends one query and waits for the reply carrying the same id.
    ///
    /// `timeout` bounds the write and the read separately.
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(_) => "UDP",
            Self::Tcp(_) => "TCP",
        }
    }
}

pub fn create_transport(protocol: UpstreamProtocol, addr: SocketAddr) -> Transport {
    match protocol {
        UpstreamProtocol::Udp => Transport::Udp(udp::UdpTransport::new(addr)),
        UpstreamProtocol::Tcp => Transport::Tcp(tcp::TcpTransport::new(addr)),
    }
}

/// Transaction id of a wire-format message, if it has one.
pub(crate) fn message_id(bytes: &[u8]) -> Option<u16> {
    match bytes {
        [hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo])),
        _ => None,
    }
}

pub(crate) fn timeout_error(server: SocketAddr) -> DomainError {
    DomainError::UpstreamTimeout {
        upstream: server.to_string(),
    }
}

pub(crate) fn io_error(server: SocketAddr, action: &str, e: std::io::Error) -> DomainError {
    DomainError::UpstreamUnreachable {
        upstream: server.to_string(),
        reason: format!("{}: {}", action, e),
    }
}
