mod record_source;
mod source_watcher;
mod upstream_forwarder;

pub use record_source::RecordSource;
pub use source_watcher::SourceWatcher;
pub use upstream_forwarder::{ForwardedResponse, UpstreamForwarder};
