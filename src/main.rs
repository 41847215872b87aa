//! Diagnostic HTTP echo service.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │                 ECHO SERVER                  │
//!     Client Request      │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!     ────────────────────┼─▶│  http   │───▶│   echo   │───▶│  echo   │  │
//!                         │  │ server  │    │reflector │    │serialize│  │
//!                         │  └─────────┘    └──────────┘    └────┬────┘  │
//!     Client Response     │                                      │       │
//!     ◀───────────────────┼──────────────────────────────────────┘       │
//!                         │                                              │
//!                         │  /env /system  → info (startup snapshots)    │
//!                         │  /fail /crash  → fault injection             │
//!                         │                                              │
//!                         │  config · observability · lifecycle          │
//!                         └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use echo_server::config::{load_config, EchoConfig, Environment};
use echo_server::lifecycle::{wait_for_signal, Shutdown};
use echo_server::observability::init_logging;
use echo_server::HttpServer;

#[derive(Parser)]
#[command(name = "echo-server")]
#[command(about = "Reflects HTTP requests back as JSON", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Environment: dev binds loopback, prod binds all interfaces.
    #[arg(short, long, value_enum)]
    env: Option<Environment>,

    /// Server port.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EchoConfig::default(),
    };
    if let Some(environment) = cli.env {
        config.listener.environment = environment;
    }
    if let Some(port) = cli.port {
        config.listener.port = port;
    }

    init_logging(&config.observability)?;

    tracing::info!("echo-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = ?config.limits.max_body_bytes,
        exposed_env_vars = config.exposure.env_vars.len(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    tokio::spawn(wait_for_signal(shutdown.clone()));

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
