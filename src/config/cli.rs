//! Command-line options.
//!
//! Parsed with `clap` in `main.rs` and converted into a library [`Config`].

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    API_KEY_ENV, API_URL_ENV, DEFAULT_API_URL, DEFAULT_BIND_ADDR, DEFAULT_PORT,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::config::types::{Config, LogFormat, LogLevel, OutputFormat};

/// Command-line interface.
///
/// # Examples
///
/// ```bash
/// # Where am I?
/// ip_locator lookup
///
/// # Locate a domain and write a map page
/// ip_locator lookup example.com --format html --output map.html
///
/// # Browser UI on http://127.0.0.1:8080/
/// ip_locator serve --port 8080
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ip_locator",
    version,
    about = "Finds where an IP address or domain is located and shows it on a map."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// ipify API key
    #[arg(long, global = true, env = API_KEY_ENV, hide_env_values = true, default_value = "")]
    pub api_key: String,

    /// Geolocation API endpoint
    #[arg(long, global = true, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds (0 waits indefinitely)
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<&GlobalArgs> for Config {
    fn from(args: &GlobalArgs) -> Self {
        Config {
            api_key: args.api_key.clone(),
            api_url: args.api_url.clone(),
            timeout_seconds: args.timeout_seconds,
            user_agent: args.user_agent.clone(),
            log_level: args.log_level,
            log_format: args.log_format,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up one IP address or domain (your own public IP when omitted)
    Lookup(LookupArgs),
    /// Interactive prompt: each line entered is looked up and shown
    Shell,
    /// Serve the search page and map on a local port
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// IPv4 address or domain name
    pub query: Option<String>,

    /// Output format: text|json|html
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the output to this file instead of stdout
    #[arg(long, value_parser)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on (0 picks a free port)
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value = DEFAULT_BIND_ADDR)]
    pub bind: IpAddr,
}
