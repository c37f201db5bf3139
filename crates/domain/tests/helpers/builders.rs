#![allow(dead_code)]
use relay_dns_domain::{RecordDefinition, RecordEntry, RecordType};

pub struct RecordEntryBuilder {
    domain: String,
    record_type: RecordType,
    value: String,
    ttl: u32,
}

impl RecordEntryBuilder {
    pub fn new() -> Self {
        Self {
            domain: "example.com".to_string(),
            record_type: RecordType::A,
            value: "192.0.2.1".to_string(),
            ttl: 300,
        }
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> RecordEntry {
        RecordEntry::new(self.domain, self.record_type, self.value, self.ttl)
    }
}

impl Default for RecordEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn definition(domain: &str, record_type: &str, value: &str, ttl: i64) -> RecordDefinition {
    RecordDefinition {
        domain: domain.to_string(),
        record_type: record_type.to_string(),
        value: value.to_string(),
        ttl,
    }
}
