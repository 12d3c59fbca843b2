use ixp_export_domain::{CliOverrides, Config};

/// Runs before logging is initialised, so it reports through its result only.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
