use async_trait::async_trait;
use relay_dns_domain::{DomainError, RecordSet};

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Reads the source and builds a complete record set.
    ///
    /// Individual bad entries are dropped; an unreadable or unparsable source
    /// is an error and the caller keeps whatever set it already has.
    async fn load(&self) -> Result<RecordSet, DomainError>;

    /// Human-readable location used in log lines.
    fn location(&self) -> &str;
}
