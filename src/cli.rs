// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Listen address, runtime override and verbosity.

use clap::Parser;
use dockmon::runtime::{RuntimeConfig, RuntimeType};

#[derive(Parser)]
#[command(name = "dockmon")]
#[command(about = "Web view of the containers on a Docker or Podman host")]
#[command(version)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    pub port: u16,

    /// Container runtime to query (auto-detected when omitted)
    #[arg(long, value_enum)]
    pub runtime: Option<RuntimeType>,

    /// Path to the runtime's API socket
    #[arg(long)]
    pub socket: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            runtime: self.runtime,
            socket: self.socket.clone(),
        }
    }
}
