//! Mock Veeam REST API Server
//!
//! Entry point for the mock server the exporter integration tests run
//! against. Simulates the token endpoint (password and refresh-token
//! grants) and two bearer-protected resources with time-based token
//! expiry.

use clap::Parser;
use mock_veeam_service::config::{Cli, Config};
use mock_veeam_service::observability;
use mock_veeam_service::routes::{self, AppState};
use mock_veeam_service::store::TokenStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpSocket;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from(Cli::parse());

    // Initialize logging first: the log file must exist before the health
    // endpoint can answer.
    observability::init_logging(&config.log_file).map_err(|e| {
        eprintln!(
            "Failed to initialize log file {}: {}",
            config.log_file.display(),
            e
        );
        e
    })?;

    info!("Mock Veeam Server on http://{}", config.bind_address());
    info!("Token lifetime: {} seconds", config.token_lifetime_secs);
    info!("Log file: {}", config.log_file.display());

    // Parse bind address before moving config
    let addr: SocketAddr = config.bind_address().parse().map_err(|e| {
        error!("Invalid bind address {}: {}", config.bind_address(), e);
        e
    })?;

    // Create application state
    let state = Arc::new(AppState {
        store: TokenStore::new(),
        config,
    });

    // Build application routes
    let app = routes::build_routes(state);

    info!("Mock Veeam Server listening on {}", addr);

    // Bind with address reuse so rapid test restarts don't fail on
    // "address in use".
    let listener = bind_reusable(addr).map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Mock Veeam Server shutdown complete");

    Ok(())
}

/// Bind a listener with SO_REUSEADDR set.
fn bind_reusable(addr: SocketAddr) -> Result<tokio::net::TcpListener, std::io::Error> {
    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;
    socket.listen(1024)
}

/// Listens for shutdown signals (SIGTERM, SIGINT).
///
/// The test driver sends an interrupt and force-kills after 5 seconds, so
/// there is no drain period: stop accepting and return immediately.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT, shutting down..."),
            Err(e) => error!("Failed to listen for SIGINT: {}", e),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received SIGTERM, shutting down...");
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
