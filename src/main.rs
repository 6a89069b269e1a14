//! Traffic-control service.
//!
//! # Architecture Overview
//!
//! ```text
//!   cameras ──POST /entrycam, /exitcam──▶ ┌──────────────────────────────┐
//!                                         │  http (axum + request span)  │
//!   sidecar ──POST /collectfine─────────▶ │                              │
//!           ◀─GET /dapr/subscribe──────── └──────────────┬───────────────┘
//!                                                        │
//!                                                        ▼
//!                                         ┌──────────────────────────────┐
//!                                         │ state::TracingStateRepository│
//!                                         │   + propagation encoder      │
//!                                         └──────────────┬───────────────┘
//!                                                        │ traceparent / tracestate
//!                                                        ▼
//!                                         sidecar state API (/v1.0/state)
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use traffic_control::config::load_config;
use traffic_control::http::{AppState, HttpServer};
use traffic_control::observability::init_telemetry;
use traffic_control::propagation::{OtelTracer, Tracer};
use traffic_control::state::{StateStore, TracingStateRepository};
use traffic_control::violation::LoggingViolationProcessor;

#[derive(Parser)]
#[command(name = "traffic-control")]
#[command(about = "Traffic control service with traced sidecar state", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "TRAFFIC_CONTROL_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let _telemetry = init_telemetry(&config.observability)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        state_backend = ?config.state.backend,
        store_name = %config.state.store_name,
        dapr_endpoint = %config.dapr.http_endpoint,
        "Configuration loaded"
    );

    let store = Arc::new(StateStore::from_config(&config)?);
    let tracer: Arc<dyn Tracer> = Arc::new(OtelTracer::new());
    let vehicles = TracingStateRepository::new(store, tracer, config.state.store_name.clone());

    let state = AppState {
        vehicles: Arc::new(vehicles),
        violations: Arc::new(LoggingViolationProcessor),
        subscription: config.subscription.clone(),
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(&config, state);
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C (or SIGTERM on unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
