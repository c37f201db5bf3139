use hickory_proto::op::{Message, ResponseCode};
use relay_dns_application::use_cases::dns::reply::header_only;
use relay_dns_application::use_cases::HandleDnsQueryUseCase;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Entry point for raw query bytes from any listener.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the bytes to send back, or `None` when the packet is too
    /// short to carry a header and is dropped.
    pub async fn handle_raw(&self, query: &[u8], client: IpAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(query) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %client, len = query.len(), error = %e, "Undecodable query");
                return header_only(query, ResponseCode::FormErr);
            }
        };

        Some(
            self.use_case
                .execute(&request, query, client)
                .await
                .into_wire(),
        )
    }
}
