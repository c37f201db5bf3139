use relay_dns_application::services::RecordStore;
use relay_dns_application::use_cases::HandleDnsQueryUseCase;
use relay_dns_domain::Config;
use relay_dns_infrastructure::dns::{DnsForwarder, DnsServerHandler};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub query_handler: Arc<HandleDnsQueryUseCase>,
    pub server_handler: Arc<DnsServerHandler>,
}

impl DnsServices {
    pub async fn new(config: &Config, store: Arc<RecordStore>) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.server.upstream_timeout);
        let forwarder = Arc::new(DnsForwarder::new(&config.upstreams, timeout).await?);

        let selected = forwarder.select();
        info!(
            upstream = %selected.name(),
            addr = %selected.addr(),
            protocol = selected.protocol_name(),
            timeout_secs = config.server.upstream_timeout,
            "Forwarding to upstream"
        );

        let query_handler = Arc::new(
            HandleDnsQueryUseCase::new(store, forwarder)
                .with_query_logging(config.server.log_queries),
        );
        let server_handler = Arc::new(DnsServerHandler::new(query_handler.clone()));

        Ok(Self {
            query_handler,
            server_handler,
        })
    }
}
