use super::RecordType;
use crate::domain_pattern::DomainPattern;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Priority used when an MX value carries no numeric priority token.
pub const DEFAULT_MX_PRIORITY: u16 = 10;

/// Longest character-string a single TXT segment can hold.
pub const MAX_TXT_SEGMENT: usize = 255;

/// One locally-defined record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    pub domain_pattern: Arc<str>,

    pub pattern: DomainPattern,

    pub record_type: RecordType,

    pub value: Arc<str>,

    pub ttl: u32,
}

/// The `"<priority> <target>"` form of an MX value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxValue<'a> {
    pub preference: u16,
    pub exchange: &'a str,
}

impl RecordEntry {
    pub fn new(
        domain_pattern: impl Into<Arc<str>>,
        record_type: RecordType,
        value: impl Into<Arc<str>>,
        ttl: u32,
    ) -> Self {
        let domain_pattern = domain_pattern.into();
        Self {
            pattern: DomainPattern::parse(&domain_pattern),
            domain_pattern,
            record_type,
            value: value.into(),
            ttl,
        }
    }

    pub fn matches(&self, domain: &str, record_type: RecordType) -> bool {
        self.record_type == record_type && self.pattern.matches(domain)
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        self.value.trim().parse().ok()
    }

    pub fn ipv6(&self) -> Option<Ipv6Addr> {
        self.value.trim().parse().ok()
    }

    /// Target name with a trailing `.` appended when missing.
    ///
    /// Meaningful for CNAME, NS and PTR; `None` on an empty value.
    pub fn target_fqdn(&self) -> Option<String> {
        fqdn(self.value.trim())
    }

    /// Parses the value as `"<priority> <target>"`.
    ///
    /// A missing, non-numeric or out-of-range priority falls back to
    /// [`DEFAULT_MX_PRIORITY`] and the first token becomes the target.
    pub fn mx(&self) -> Option<MxValue<'_>> {
        let mut tokens = self.value.split_whitespace();
        let first = tokens.next()?;

        match (first.parse::<u16>(), tokens.next()) {
            (Ok(preference), Some(exchange)) => Some(MxValue {
                preference,
                exchange,
            }),
            _ => Some(MxValue {
                preference: DEFAULT_MX_PRIORITY,
                exchange: first,
            }),
        }
    }

    /// Splits the value into TXT character-strings of at most
    /// [`MAX_TXT_SEGMENT`] bytes, never cutting a UTF-8 sequence.
    pub fn txt_segments(&self) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current = String::new();

        for ch in self.value.chars() {
            if current.len() + ch.len_utf8() > MAX_TXT_SEGMENT {
                segments.push(std::mem::take(&mut current));
            }
            current.push(ch);
        }

        if !current.is_empty() || segments.is_empty() {
            segments.push(current);
        }
        segments
    }
}

impl MxValue<'_> {
    pub fn exchange_fqdn(&self) -> Option<String> {
        fqdn(self.exchange)
    }
}

fn fqdn(name: &str) -> Option<String> {
    if name.is_empty() {
        None
    } else if name.ends_with('.') {
        Some(name.to_string())
    } else {
        Some(format!("{}.", name))
    }
}
