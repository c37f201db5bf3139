#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use relay_dns_application::ports::{ForwardedResponse, RecordSource, UpstreamForwarder};
use relay_dns_domain::{DomainError, RecordEntry, RecordSet, RecordType};
use std::sync::{Arc, Mutex};

/// Upstream double. By default it echoes the query back with the QR bit set.
#[derive(Clone)]
pub struct MockForwarder {
    name: Arc<str>,
    calls: Arc<Mutex<Vec<Vec<u8>>>>,
    response: Arc<Mutex<Option<Vec<u8>>>>,
    error: Arc<Mutex<Option<DomainError>>>,
}

impl MockForwarder {
    pub fn new() -> Self {
        Self {
            name: Arc::from("mock-upstream"),
            calls: Arc::new(Mutex::new(Vec::new())),
            response: Arc::new(Mutex::new(None)),
            error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_response(&self, bytes: Vec<u8>) {
        *self.response.lock().unwrap() = Some(bytes);
    }

    pub fn set_error(&self, error: DomainError) {
        *self.error.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<Vec<u8>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn echo(query: &[u8]) -> Vec<u8> {
        let mut reply = query.to_vec();
        if reply.len() > 2 {
            reply[2] |= 0x80;
        }
        reply
    }
}

impl Default for MockForwarder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamForwarder for MockForwarder {
    async fn forward(&self, query: &[u8]) -> Result<ForwardedResponse, DomainError> {
        self.calls.lock().unwrap().push(query.to_vec());

        if let Some(error) = self.error.lock().unwrap().clone() {
            return Err(error);
        }

        let bytes = self
            .response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Self::echo(query));

        Ok(ForwardedResponse {
            bytes: Bytes::from(bytes),
            upstream: Arc::clone(&self.name),
        })
    }
}

/// Record source double returning whatever was last configured.
#[derive(Clone)]
pub struct MockRecordSource {
    next: Arc<Mutex<Result<RecordSet, DomainError>>>,
    loads: Arc<Mutex<usize>>,
}

impl MockRecordSource {
    pub fn new(set: RecordSet) -> Self {
        Self {
            next: Arc::new(Mutex::new(Ok(set))),
            loads: Arc::new(Mutex::new(0)),
        }
    }

    pub fn set_records(&self, set: RecordSet) {
        *self.next.lock().unwrap() = Ok(set);
    }

    pub fn set_error(&self, error: DomainError) {
        *self.next.lock().unwrap() = Err(error);
    }

    pub fn load_count(&self) -> usize {
        *self.loads.lock().unwrap()
    }
}

#[async_trait]
impl RecordSource for MockRecordSource {
    async fn load(&self) -> Result<RecordSet, DomainError> {
        *self.loads.lock().unwrap() += 1;
        self.next.lock().unwrap().clone()
    }

    fn location(&self) -> &str {
        "mock://records"
    }
}

pub fn record(domain: &str, record_type: RecordType, value: &str, ttl: u32) -> RecordEntry {
    RecordEntry::new(domain, record_type, value, ttl)
}
