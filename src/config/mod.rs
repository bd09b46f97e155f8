//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, map settings, messages)
//! - The library `Config` and its validation
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command, GlobalArgs, LookupArgs, ServeArgs};
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel, OutputFormat};
