//! Relay DNS Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod domain_pattern;
pub mod errors;
pub mod record_set;

pub use config::{
    CliOverrides, Config, ConfigError, LoggingConfig, ServerConfig, UpstreamConfig,
    UpstreamProtocol, UpstreamTarget, DEFAULT_CONFIG_PATH,
};
pub use dns_query::DnsQuery;
pub use dns_record::{
    MxValue, RecordDefinition, RecordEntry, RecordType, RecordsDocument, DEFAULT_MX_PRIORITY,
    MAX_TXT_SEGMENT,
};
pub use domain_pattern::DomainPattern;
pub use errors::DomainError;
pub use record_set::{RecordSet, Rejected};
