use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query has no question section")]
    EmptyQuestion,

    #[error("Upstream {upstream} timed out")]
    UpstreamTimeout { upstream: String },

    #[error("Upstream {upstream} unreachable: {reason}")]
    UpstreamUnreachable { upstream: String, reason: String },

    #[error("Invalid upstream configuration: {0}")]
    InvalidUpstream(String),

    #[error("Invalid DNS response: {0}")]
    InvalidResponse(String),

    #[error("Failed to access record source {path}: {reason}")]
    RecordSourceIo { path: String, reason: String },

    #[error("Failed to parse record source {path}: {reason}")]
    RecordSourceParse { path: String, reason: String },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("File watch failed: {0}")]
    WatchFailed(String),
}

impl DomainError {
    /// Name of the upstream involved, for forwarding failures.
    pub fn upstream(&self) -> Option<&str> {
        match self {
            Self::UpstreamTimeout { upstream } | Self::UpstreamUnreachable { upstream, .. } => {
                Some(upstream)
            }
            _ => None,
        }
    }
}
