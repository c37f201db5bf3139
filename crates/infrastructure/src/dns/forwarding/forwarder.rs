use crate::dns::transport::{create_transport, resolver, Transport};
use async_trait::async_trait;
use relay_dns_application::ports::{ForwardedResponse, UpstreamForwarder};
use relay_dns_domain::{DomainError, UpstreamTarget};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// An upstream with its address resolved and transport ready.
pub struct UpstreamEndpoint {
    name: Arc<str>,
    addr: SocketAddr,
    transport: Transport,
}

impl UpstreamEndpoint {
    pub fn new(target: &UpstreamTarget, addr: SocketAddr) -> Self {
        Self {
            name: Arc::clone(&target.name),
            addr,
            transport: create_transport(target.transport, addr),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn protocol_name(&self) -> &'static str {
        self.transport.protocol_name()
    }
}

/// Relays raw queries to the first configured upstream.
pub struct DnsForwarder {
    upstreams: Vec<UpstreamEndpoint>,
    timeout: Duration,
}

impl DnsForwarder {
    /// Resolves every target once. Targets that cannot be resolved are
    /// skipped with a warning; at least one must remain.
    pub async fn new(targets: &[UpstreamTarget], timeout: Duration) -> Result<Self, DomainError> {
        let mut upstreams = Vec::with_capacity(targets.len());

        for target in targets {
            match resolve_target(target, timeout).await {
                Ok(addr) => {
                    info!(
                        upstream = %target.name,
                        addr = %addr,
                        protocol = %target.transport,
                        "Upstream ready"
                    );
                    upstreams.push(UpstreamEndpoint::new(target, addr));
                }
                Err(e) => warn!(upstream = %target.name, error = %e, "Skipping upstream"),
            }
        }

        Self::from_endpoints(upstreams, timeout)
    }

    pub fn from_endpoints(
        upstreams: Vec<UpstreamEndpoint>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        if upstreams.is_empty() {
            return Err(DomainError::InvalidUpstream(
                "no usable upstream resolvers".to_string(),
            ));
        }
        Ok(Self { upstreams, timeout })
    }

    /// Upstream that receives the next query: always the first in
    /// configured order.
    pub fn select(&self) -> &UpstreamEndpoint {
        &self.upstreams[0]
    }

    pub fn upstreams(&self) -> &[UpstreamEndpoint] {
        &self.upstreams
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl UpstreamForwarder for DnsForwarder {
    async fn forward(&self, query: &[u8]) -> Result<ForwardedResponse, DomainError> {
        let upstream = self.select();

        let response = upstream
            .transport
            .send(query, self.timeout)
            .await
            .map_err(|e| name_upstream(e, upstream.name()))?;

        debug!(
            upstream = %upstream.name,
            protocol = response.protocol_used,
            bytes = response.bytes.len(),
            "Upstream replied"
        );

        Ok(ForwardedResponse {
            bytes: response.bytes,
            upstream: Arc::clone(&upstream.name),
        })
    }
}

async fn resolve_target(
    target: &UpstreamTarget,
    timeout: Duration,
) -> Result<SocketAddr, DomainError> {
    let host = target.address.trim_start_matches('[').trim_end_matches(']');

    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, target.port));
    }

    let addrs = resolver::resolve_all(host, target.port, timeout).await?;
    addrs
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| DomainError::InvalidUpstream(format!("No addresses found for {}", host)))
}

/// Transports report the socket address; callers want the configured name.
fn name_upstream(error: DomainError, name: &str) -> DomainError {
    match error {
        DomainError::UpstreamTimeout { .. } => DomainError::UpstreamTimeout {
            upstream: name.to_string(),
        },
        DomainError::UpstreamUnreachable { reason, .. } => DomainError::UpstreamUnreachable {
            upstream: name.to_string(),
            reason,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_dns_domain::{UpstreamConfig, UpstreamProtocol};

    fn target(name: &str, address: &str) -> UpstreamTarget {
        UpstreamTarget::new(
            name,
            UpstreamConfig {
                address: address.to_string(),
                port: 5300,
                protocol: UpstreamProtocol::Udp,
            },
        )
    }

    #[tokio::test]
    async fn test_first_upstream_is_selected() {
        let forwarder = DnsForwarder::new(
            &[target("first", "127.0.0.1"), target("second", "127.0.0.2")],
            Duration::from_secs(1),
        )
        .await
        .unwrap();

        assert_eq!(forwarder.upstreams().len(), 2);
        assert_eq!(forwarder.select().name(), "first");
        assert_eq!(forwarder.select().addr(), "127.0.0.1:5300".parse().unwrap());
    }

    #[tokio::test]
    async fn test_ipv6_literal_target() {
        let forwarder = DnsForwarder::new(&[target("v6", "::1")], Duration::from_secs(1))
            .await
            .unwrap();

        assert_eq!(forwarder.select().addr(), "[::1]:5300".parse().unwrap());
    }

    #[test]
    fn test_no_endpoints_is_an_error() {
        let result = DnsForwarder::from_endpoints(Vec::new(), Duration::from_secs(1));
        assert!(result.is_err());
    }

    #[test]
    fn test_errors_carry_upstream_name() {
        let renamed = name_upstream(
            DomainError::UpstreamTimeout {
                upstream: "127.0.0.1:53".to_string(),
            },
            "primary",
        );
        assert_eq!(renamed.upstream(), Some("primary"));
        assert!(matches!(renamed, DomainError::UpstreamTimeout { .. }));
    }
}
