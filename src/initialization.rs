use std::env;
use anyhow::{Context, Result};
use log::info;
use crate::config::{load_config, Config};
use crate::logging::setup_logger;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Loads configuration and starts logging
///
/// The config file is taken from CONFIG_PATH if set, otherwise config.toml in the working
/// directory is used when present and built in defaults when not.
pub fn config() -> Result<Config> {
    let (config_path, required) = match env::var("CONFIG_PATH") {
        Ok(path) => (path, true),
        Err(_) => (DEFAULT_CONFIG_PATH.to_string(), false),
    };

    let config = load_config(&config_path, required)
        .with_context(|| format!("loading configuration from {}", config_path))?;
    setup_logger(&config.general).context("starting logger")?;

    info!("forecast_summary version: {}", env!("CARGO_PKG_VERSION"));

    Ok(config)
}
