// ABOUTME: Entry point for the dockmon web server.
// ABOUTME: Parses arguments, checks the runtime once and serves HTTP.

mod cli;

use clap::Parser;
use cli::Cli;
use dockmon::error::{Error, Result};
use dockmon::runtime::{self, RuntimeConfig, RuntimeInfoTrait};
use dockmon::web::{self, AppState};
use std::net::{IpAddr, SocketAddr};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbose flag when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let ip: IpAddr = cli
        .host
        .parse()
        .map_err(|_| Error::InvalidAddress(cli.host.clone()))?;
    let addr = SocketAddr::new(ip, cli.port);

    let config = cli.runtime_config();
    check_runtime(&config).await;

    web::serve(addr, AppState::new(config)).await
}

/// Log whether the runtime is reachable. Never fatal: requests report
/// runtime errors on their own.
async fn check_runtime(config: &RuntimeConfig) {
    let runtime = match runtime::connect(config) {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::warn!("container runtime not available yet: {e}");
            return;
        }
    };

    if let Err(e) = runtime.ping().await {
        tracing::warn!(runtime = %runtime.runtime_type(), "container runtime not reachable: {e}");
        return;
    }

    match runtime.info().await {
        Ok(meta) => tracing::info!(
            "connected to {} {} ({}/{})",
            meta.name,
            meta.version,
            meta.os,
            meta.arch
        ),
        Err(e) => tracing::debug!("runtime answered ping but not info: {e}"),
    }
}
