//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_locator` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output and exit codes
//!
//! All core functionality is implemented in the library crate.

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use ip_locator::app::{run_lookup, run_shell, server, write_output};
use ip_locator::config::{Cli, Command, LookupArgs, ServeArgs};
use ip_locator::initialization::init_logger_with;
use ip_locator::{Config, Controller, GeolocationClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load IPIFY_API_KEY from a .env file in the current directory, or next
    // to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = Config::from(&cli.global);

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli.command, config).await {
        eprintln!("ip_locator error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(command: Command, config: Config) -> Result<()> {
    config.validate()?;
    let client =
        GeolocationClient::from_config(&config).context("Failed to set up geolocation client")?;

    match command {
        Command::Lookup(args) => lookup(&client, args).await,
        Command::Shell => {
            let controller = Controller::new(client);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_shell(&controller, stdin, &mut std::io::stdout()).await
        }
        Command::Serve(args) => serve(client, args).await,
    }
}

async fn lookup(client: &GeolocationClient, args: LookupArgs) -> Result<()> {
    let output = run_lookup(client, args.query.as_deref(), args.format).await?;
    write_output(&output, args.output.as_deref())?;
    if let Some(path) = &args.output {
        println!("✅ Wrote {}", path.display());
    }
    Ok(())
}

async fn serve(client: GeolocationClient, args: ServeArgs) -> Result<()> {
    let listener = server::bind(SocketAddr::new(args.bind, args.port)).await?;
    let controller = Arc::new(Controller::new(client));

    if let Ok(addr) = listener.local_addr() {
        println!("🗺️  Open http://{}/ in your browser", addr);
    }
    server::launch(listener, controller).await
}
