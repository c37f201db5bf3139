pub mod forwarder;

pub use forwarder::{DnsForwarder, UpstreamEndpoint};
