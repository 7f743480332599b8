//! Serve command - runs the HTTP API

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::create_router;
use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::observability::{create_metrics_router, init_metrics};

/// Run the API server until Ctrl+C or SIGTERM
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_logging(&config.logging);

    let state = crate::create_app_state_with_config(&config).await?;
    let app = build_app(&config, create_router(state, config.server.max_upload_bytes));

    let addr = build_socket_addr(&config)?;
    info!("Starting QAT API on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

fn build_app(config: &AppConfig, router: Router) -> Router {
    match init_metrics(&config.metrics) {
        Some(metrics) => {
            info!(path = %config.metrics.path, "Prometheus metrics enabled");
            router.merge(create_metrics_router(metrics, &config.metrics.path))
        }
        None => router,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
