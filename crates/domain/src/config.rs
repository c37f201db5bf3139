pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_PATH};
pub use server::ServerConfig;
pub use upstream::{UpstreamConfig, UpstreamProtocol, UpstreamTarget};
