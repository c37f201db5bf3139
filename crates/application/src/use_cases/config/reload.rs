use relay_dns_domain::{CliOverrides, Config, ConfigError};
use tracing::{info, warn};

/// Result of a successful configuration reload.
#[derive(Debug, Clone)]
pub struct ConfigReload {
    pub config: Config,
    /// Listener, upstreams or records location differ from what the server
    /// started with; they only apply after a restart.
    pub restart_required: bool,
}

pub struct ReloadConfigUseCase {
    path: String,
    overrides: CliOverrides,
    running: Config,
}

impl ReloadConfigUseCase {
    pub fn new(path: impl Into<String>, overrides: CliOverrides, running: Config) -> Self {
        Self {
            path: path.into(),
            overrides,
            running,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Re-reads the config file with the startup command-line overrides
    /// applied. An invalid file is reported and changes nothing.
    pub fn execute(&self) -> Result<ConfigReload, ConfigError> {
        let config = Config::load(&self.path, self.overrides.clone())?;
        config.validate()?;

        let restart_required = self.running.requires_restart(&config);
        if restart_required {
            warn!(
                path = %self.path,
                "Listener, upstream or records file settings changed; restart to apply them"
            );
        }
        info!(path = %self.path, "Configuration reloaded");

        Ok(ConfigReload {
            config,
            restart_required,
        })
    }
}
