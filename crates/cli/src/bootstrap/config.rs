use relay_dns_domain::{CliOverrides, Config};

/// Reads, overrides and validates the main config. Any failure is fatal.
pub fn load_config(config_path: &str, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
