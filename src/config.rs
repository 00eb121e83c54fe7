use std::fs;
use std::path::Path;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

const DEFAULT_FORECAST_FILE: &str = "data/forecast_5days_a.json";

#[derive(Deserialize)]
pub struct Files {
    #[serde(default = "default_forecast_file")]
    pub forecast_file: String,
}

#[derive(Deserialize)]
pub struct General {
    #[serde(default)]
    pub log_path: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: LevelFilter,
    #[serde(default = "default_log_to_stderr")]
    pub log_to_stderr: bool,
}

#[derive(Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub files: Files,
    #[serde(default)]
    pub general: General,
}

impl Default for Files {
    fn default() -> Self {
        Files { forecast_file: default_forecast_file() }
    }
}

impl Default for General {
    fn default() -> Self {
        General { log_path: None, log_level: default_log_level(), log_to_stderr: default_log_to_stderr() }
    }
}

fn default_forecast_file() -> String { DEFAULT_FORECAST_FILE.to_string() }
fn default_log_level() -> LevelFilter { LevelFilter::Warn }
fn default_log_to_stderr() -> bool { true }

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
/// * 'required' - whether a missing file is an error or means built in defaults
pub fn load_config(config_path: &str, required: bool) -> Result<Config, ConfigError> {
    if !Path::new(config_path).exists() {
        return if required {
            Err(ConfigError::NotFound(config_path.to_string()))
        } else {
            Ok(Config::default())
        };
    }

    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.files.forecast_file, DEFAULT_FORECAST_FILE);
        assert_eq!(config.general.log_level, LevelFilter::Warn);
        assert!(config.general.log_to_stderr);
        assert!(config.general.log_path.is_none());
    }

    #[test]
    fn reads_all_sections() {
        let toml = r#"
            [files]
            forecast_file = "/var/lib/forecast/today.json"

            [general]
            log_path = "/var/log/forecast_summary.log"
            log_level = "debug"
            log_to_stderr = false
        "#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.files.forecast_file, "/var/lib/forecast/today.json");
        assert_eq!(config.general.log_path.as_deref(), Some("/var/log/forecast_summary.log"));
        assert_eq!(config.general.log_level, LevelFilter::Debug);
        assert!(!config.general.log_to_stderr);
    }

    #[test]
    fn optional_missing_file_falls_back_to_defaults() {
        let config = load_config("/nonexistent/forecast_summary/config.toml", false).unwrap();
        assert_eq!(config.files.forecast_file, DEFAULT_FORECAST_FILE);
    }

    #[test]
    fn required_missing_file_is_an_error() {
        let result = load_config("/nonexistent/forecast_summary/config.toml", true);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn loads_bundled_config() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml");
        let config = load_config(path, true).unwrap();
        assert_eq!(config.files.forecast_file, DEFAULT_FORECAST_FILE);
    }
}
