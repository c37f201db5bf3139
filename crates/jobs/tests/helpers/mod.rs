#![allow(dead_code)]

use async_trait::async_trait;
use relay_dns_application::ports::{
    ForwardedResponse, RecordSource, SourceWatcher, UpstreamForwarder,
};
use relay_dns_domain::{DomainError, RecordEntry, RecordSet, RecordType};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Watcher fed by hand through the returned sender.
pub struct ChannelWatcher {
    rx: mpsc::Receiver<()>,
}

impl ChannelWatcher {
    pub fn new() -> (Self, mpsc::Sender<()>) {
        let (tx, rx) = mpsc::channel(8);
        (Self { rx }, tx)
    }
}

#[async_trait]
impl SourceWatcher for ChannelWatcher {
    async fn changed(&mut self) -> bool {
        self.rx.recv().await.is_some()
    }
}

pub struct MockRecordSource {
    next: Mutex<RecordSet>,
    loads: AtomicUsize,
}

impl MockRecordSource {
    pub fn new() -> Self {
        Self {
            next: Mutex::new(RecordSet::empty()),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn set_records(&self, set: RecordSet) {
        *self.next.lock().unwrap() = set;
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordSource for MockRecordSource {
    async fn load(&self) -> Result<RecordSet, DomainError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.next.lock().unwrap().clone())
    }

    fn location(&self) -> &str {
        "mock://records"
    }
}

pub struct UnreachableForwarder;

#[async_trait]
impl UpstreamForwarder for UnreachableForwarder {
    async fn forward(&self, _query: &[u8]) -> Result<ForwardedResponse, DomainError> {
        Err(DomainError::UpstreamUnreachable {
            upstream: "none".to_string(),
            reason: "test".to_string(),
        })
    }
}

pub fn single_record(value: &str) -> RecordSet {
    let entry = RecordEntry::new("test.local", RecordType::A, value, 60);
    RecordSet::new(vec![entry])
}

/// Polls `condition` for up to two seconds.
pub async fn eventually(condition: impl Fn() -> bool) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    condition()
}
