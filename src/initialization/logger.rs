//! Logger initialization.
//!
//! This module provides the function that initializes the logger with custom
//! formatting. Log lines go to stderr so they never mix with rendered output.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=ip_locator=debug,reqwest=info ip_locator lookup 8.8.8.8
///
/// # CLI level takes precedence
/// ip_locator --log-level debug lookup example.com
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for (module, cap) in DEPENDENCY_LEVELS {
        builder.filter_module(module, level.min(*cap));
    }
    builder.filter_module(env!("CARGO_CRATE_NAME"), level);

    match format {
        LogFormat::Json => builder.format(|buf, record| writeln!(buf, "{}", json_line(record))),
        LogFormat::Plain => builder.format(|buf, record| writeln!(buf, "{}", plain_line(record))),
    };

    // try_init() so a second initialization (tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Most verbose level let through for the HTTP stack underneath the client
/// and the web UI. `hyper` also covers `hyper_util`.
const DEPENDENCY_LEVELS: &[(&str, LevelFilter)] = &[
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("axum", LevelFilter::Info),
    ("tower", LevelFilter::Warn),
];

fn json_line(record: &log::Record<'_>) -> String {
    serde_json::json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}

fn plain_line(record: &log::Record<'_>) -> String {
    let level = record.level();
    let (emoji, tag) = match level {
        log::Level::Error => ("❌", level.as_str().red()),
        log::Level::Warn => ("⚠️", level.as_str().yellow()),
        log::Level::Info => ("📍", level.as_str().green()),
        log::Level::Debug => ("🔍", level.as_str().blue()),
        log::Level::Trace => ("🔬", level.as_str().purple()),
    };
    format!("{} {} [{}] {}", emoji, record.target().cyan(), tag, record.args())
}
