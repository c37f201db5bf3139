use serde::Deserialize;
use std::net::IpAddr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::{deserialize_ordered, UpstreamTarget};

/// Default location of the main configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.toml";

/// Main configuration structure for relay-dns
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Listener, query logging and records file settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Upstream resolvers in the order they were written
    #[serde(default, deserialize_with = "deserialize_ordered")]
    pub upstreams: Vec<UpstreamTarget>,
}

impl Config {
    /// Load configuration from `path` and apply command-line overrides.
    ///
    /// The result is not validated; call [`Config::validate`] before use.
    pub fn load(path: &str, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(listen) = overrides.listen {
            self.server.listen = listen;
        }
        if let Some(records) = overrides.records_file {
            self.server.records_file = records;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstreams.is_empty() {
            return Err(ConfigError::NoUpstreamsConfigured);
        }

        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.listen.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Listen address '{}' is not an IP address",
                self.server.listen
            )));
        }

        if self.server.records_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "records_file cannot be empty".to_string(),
            ));
        }

        if self.server.upstream_timeout == 0 {
            return Err(ConfigError::Validation(
                "upstream_timeout must be at least 1 second".to_string(),
            ));
        }

        for upstream in &self.upstreams {
            if upstream.address.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Upstream '{}' has no address",
                    upstream.name
                )));
            }
            if upstream.port == 0 {
                return Err(ConfigError::Validation(format!(
                    "Upstream '{}' port cannot be 0",
                    upstream.name
                )));
            }
        }

        Ok(())
    }

    /// Settings that only take effect after a restart.
    pub fn requires_restart(&self, other: &Config) -> bool {
        self.upstreams != other.upstreams
            || self.server.listen != other.server.listen
            || self.server.port != other.server.port
            || self.server.upstream_timeout != other.server.upstream_timeout
            || self.server.records_file != other.server.records_file
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub listen: Option<String>,
    pub records_file: Option<String>,
    pub log_level: Option<String>,
}
