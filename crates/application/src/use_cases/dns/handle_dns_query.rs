use super::local_answer;
use super::record_type_map::RecordTypeMapper;
use super::reply::failure_response;
use crate::ports::{ForwardedResponse, UpstreamForwarder};
use crate::services::RecordStore;
use hickory_proto::op::{Message, Query, ResponseCode};
use relay_dns_domain::DnsQuery;
use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// What the pipeline produced for one query.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    /// Answer built from a local record.
    Local(Vec<u8>),
    /// Upstream reply, relayed verbatim.
    Forwarded(ForwardedResponse),
    /// SERVFAIL or FORMERR generated here.
    Failed(Vec<u8>),
}

impl QueryOutcome {
    pub fn wire(&self) -> &[u8] {
        match self {
            Self::Local(bytes) | Self::Failed(bytes) => bytes,
            Self::Forwarded(response) => &response.bytes,
        }
    }

    pub fn into_wire(self) -> Vec<u8> {
        match self {
            Self::Local(bytes) | Self::Failed(bytes) => bytes,
            Self::Forwarded(response) => response.bytes.to_vec(),
        }
    }

    pub fn served_by(&self) -> &'static str {
        match self {
            Self::Local(_) => "local",
            Self::Forwarded(_) => "upstream",
            Self::Failed(_) => "failure",
        }
    }
}

pub struct HandleDnsQueryUseCase {
    records: Arc<RecordStore>,
    forwarder: Arc<dyn UpstreamForwarder>,
    log_queries: AtomicBool,
}

impl HandleDnsQueryUseCase {
    pub fn new(records: Arc<RecordStore>, forwarder: Arc<dyn UpstreamForwarder>) -> Self {
        Self {
            records,
            forwarder,
            log_queries: AtomicBool::new(false),
        }
    }

    pub fn with_query_logging(self, enabled: bool) -> Self {
        self.set_query_logging(enabled);
        self
    }

    /// Switches per-query log lines between `info` and `debug`.
    pub fn set_query_logging(&self, enabled: bool) {
        self.log_queries.store(enabled, Ordering::Relaxed);
    }

    /// Answers `request` from local records when one matches its first
    /// question, otherwise relays `wire` to the upstream.
    ///
    /// Never fails: every path yields bytes to send back to the client.
    pub async fn execute(&self, request: &Message, wire: &[u8], client: IpAddr) -> QueryOutcome {
        let start = Instant::now();

        let Some(question) = request.queries().first() else {
            debug!(client = %client, id = request.id(), "Query without question");
            return QueryOutcome::Failed(failure_response(request, ResponseCode::FormErr, wire));
        };

        let outcome = match self.answer_locally(request, question) {
            Some(response) => QueryOutcome::Local(response),
            None => self.forward(request, wire).await,
        };

        self.log_query(question, client, &outcome, start);
        outcome
    }

    fn answer_locally(&self, request: &Message, question: &Query) -> Option<Vec<u8>> {
        let record_type = RecordTypeMapper::from_hickory(question.query_type())?;
        let query = DnsQuery::new(question.name().to_ascii(), record_type);

        let entry = self.records.lookup(&query.domain, query.record_type)?;

        match local_answer::build_response(request, question, &entry) {
            Ok(response) => Some(response),
            Err(e) => {
                warn!(query = %query, error = %e, "Local record unusable, forwarding instead");
                None
            }
        }
    }

    async fn forward(&self, request: &Message, wire: &[u8]) -> QueryOutcome {
        match self.forwarder.forward(wire).await {
            Ok(response) => QueryOutcome::Forwarded(response),
            Err(e) => {
                warn!(
                    error = %e,
                    upstream = e.upstream().unwrap_or("-"),
                    id = request.id(),
                    "Upstream forwarding failed"
                );
                QueryOutcome::Failed(failure_response(request, ResponseCode::ServFail, wire))
            }
        }
    }

    fn log_query(&self, question: &Query, client: IpAddr, outcome: &QueryOutcome, start: Instant) {
        let upstream = match outcome {
            QueryOutcome::Forwarded(response) => &*response.upstream,
            _ => "-",
        };
        let elapsed_us = start.elapsed().as_micros() as u64;

        if self.log_queries.load(Ordering::Relaxed) {
            info!(
                client = %client,
                domain = %question.name(),
                record_type = %question.query_type(),
                served_by = outcome.served_by(),
                upstream,
                elapsed_us,
                "DNS query"
            );
        } else {
            debug!(
                client = %client,
                domain = %question.name(),
                record_type = %question.query_type(),
                served_by = outcome.served_by(),
                upstream,
                elapsed_us,
                "DNS query"
            );
        }
    }
}
