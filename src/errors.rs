use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;
use crate::manager_forecast::errors::LoadError;

#[derive(Error, Debug)]
#[error("date '{input}' does not match YYYY-MM-DDTHH:MM:SS+HH:MM: {reason}")]
pub struct ParseError {
    pub input: String,
    pub reason: String,
}
impl From<(&str, chrono::ParseError)> for ParseError {
    fn from((input, e): (&str, chrono::ParseError)) -> Self {
        ParseError { input: input.to_string(), reason: e.to_string() }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SummaryError {
    #[error("forecast holds no days to summarize")]
    NoDays,
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),
    #[error("unable to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unable to start logging: {0}")]
    Logging(String),
}
impl From<log::SetLoggerError> for ConfigError {
    fn from(e: log::SetLoggerError) -> Self { ConfigError::Logging(e.to_string()) }
}

/// Error surfaced at the process boundary, its Debug rendering is what is printed on exit
pub struct UnrecoverableError(pub String);

impl fmt::Display for UnrecoverableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "UnrecoverableError: {}", self.0)
    }
}
impl fmt::Debug for UnrecoverableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
impl From<anyhow::Error> for UnrecoverableError {
    fn from(e: anyhow::Error) -> Self {
        UnrecoverableError(format!("{:#}", e))
    }
}
impl From<ReportError> for UnrecoverableError {
    fn from(e: ReportError) -> Self { UnrecoverableError(e.to_string()) }
}
