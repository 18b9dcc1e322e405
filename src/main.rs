//! Contract Deploy Gateway
//!
//! A thin HTTP service built with Tokio and Axum that deploys compiled
//! smart-contract artifacts with a custodial signing key.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌──────────────────────────────────────────────┐
//!                   │                DEPLOY GATEWAY                 │
//!                   │                                               │
//!   POST /api/…     │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ────────────────┼─▶│  http   │──▶│ api-key  │──▶│  deploy / │  │
//!                   │  │ server  │   │   gate   │   │   keys    │  │
//!                   │  └─────────┘   └──────────┘   └─────┬─────┘  │
//!                   │                                     │        │
//!                   │                                     ▼        │
//!   JSON response   │                              ┌───────────┐   │      JSON-RPC
//!   ◀───────────────┼──────────────────────────────│  alloy    │───┼────▶ endpoint
//!                   │                              │ submission│   │
//!                   │                              └───────────┘   │
//!                   │                                               │
//!                   │  config │ observability │ lifecycle           │
//!                   └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use tokio::net::TcpListener;

use deploy_gateway::config::{load_config, GatewayConfig};
use deploy_gateway::http::HttpServer;
use deploy_gateway::lifecycle::{signal_received, Shutdown};
use deploy_gateway::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("deploy-gateway v0.1.0 starting");

    // Config path from first argument or DEPLOY_GATEWAY_CONFIG; defaults
    // apply when neither is given.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DEPLOY_GATEWAY_CONFIG").ok())
        .map(PathBuf::from);

    let config = match config_path {
        Some(path) => load_config(&path)?,
        None => GatewayConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        gate_enabled = config.gate.enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        signal_received().await;
        tracing::info!("Shutdown signal received");
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
