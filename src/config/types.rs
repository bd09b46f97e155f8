//! Configuration types.
//!
//! This module defines the enums and the library `Config` struct used by the
//! lookup pipeline. Command-line parsing lives in `config::cli`.

use clap::ValueEnum;
use thiserror::Error;

use crate::config::constants::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format of a one-shot lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Detail panel as colored text
    Text,
    /// The raw location record as JSON
    Json,
    /// A standalone HTML page with the map
    Html,
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending option
    pub field: &'static str,
    /// What is wrong with it and how to fix it
    pub message: String,
}

impl ConfigValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the configuration consumed by the geolocation client and the
/// application surfaces. It can be constructed programmatically without any
/// CLI parsing.
///
/// # Examples
///
/// ```no_run
/// use ip_locator::Config;
///
/// let config = Config {
///     api_key: "at_XXXXXXXX".to_string(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// ipify API key (opaque credential)
    pub api_key: String,

    /// Geolocation API endpoint
    pub api_url: String,

    /// Per-request timeout in seconds (0 disables the timeout)
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks that the configuration can be used to reach the geolocation API.
    ///
    /// # Errors
    ///
    /// Returns the first offending field: an empty API key, or an API URL
    /// that is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "api_key",
                "an ipify API key is required (set IPIFY_API_KEY or pass --api-key)",
            ));
        }

        match url::Url::parse(&self.api_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => {
                return Err(ConfigValidationError::new(
                    "api_url",
                    format!("scheme must be http or https, got '{}'", parsed.scheme()),
                ));
            }
            Err(e) => {
                return Err(ConfigValidationError::new(
                    "api_url",
                    format!("'{}' is not a valid URL ({})", self.api_url, e),
                ));
            }
        }

        Ok(())
    }
}
