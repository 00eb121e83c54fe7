use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::General;
use crate::errors::ConfigError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} - {m}{n}";

/// Builds the log4rs configuration, stdout is left alone since it carries the report
///
/// # Arguments
///
/// * 'general' - general configuration holding log level and destinations
pub fn build_log_config(general: &General) -> Result<log4rs::Config, ConfigError> {
    let mut builder = log4rs::Config::builder();
    let mut root = Root::builder();

    if general.log_to_stderr {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stderr", Box::new(stderr)));
        root = root.appender("stderr");
    }

    if let Some(log_path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(log_path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    builder
        .build(root.build(general.log_level))
        .map_err(|e| ConfigError::Logging(e.to_string()))
}

/// Sets up logging according to configuration
///
/// # Arguments
///
/// * 'general' - general configuration holding log level and destinations
pub fn setup_logger(general: &General) -> Result<(), ConfigError> {
    let config = build_log_config(general)?;
    log4rs::init_config(config)?;

    Ok(())
}
