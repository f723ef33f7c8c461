//! Inference API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request       ┌──────────────────────────────────────────────┐
//!     ─────────────────────┼─▶ request-id → trace → cors → limit → timeout │
//!                          │                     │                        │
//!                          │                     ▼                        │
//!                          │   /health  /  /echo/{m}  /predict            │
//!                          │                                │             │
//!                          │                                ▼             │
//!     Client Response      │                     inference engine         │
//!     ◀────────────────────┼──── JSON ◀──────── (length ranker)           │
//!                          └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use inference_api::config;
use inference_api::http::HttpServer;
use inference_api::lifecycle::{self, Shutdown, StartupError};
use inference_api::observability::logging;

#[derive(Parser)]
#[command(name = "inference-api")]
#[command(about = "Health, echo and placeholder inference HTTP service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "INFERENCE_API_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = config::load(args.config.as_deref())?;

    logging::init(&config.observability)?;

    tracing::info!("inference-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        cors_origins = ?config.cors.allow_origins,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    lifecycle::on_startup(&config).await?;

    let bind_address = config.listener.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: bind_address.clone(),
            source,
        })?;

    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        lifecycle::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config.clone());
    server.run(listener, server_shutdown).await?;

    lifecycle::on_shutdown(&config).await;
    Ok(())
}
