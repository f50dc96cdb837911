//! # Phrasebook API Server
//!
//! ```text
//! load ApiConfig ──► connect + migrate ──► serve ──► signal ──► close pool
//! ```

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use phrasebook_api::{config::ApiConfig, router, AppState};
use phrasebook_db::{migrations, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    info!("Starting Phrasebook API server...");

    let config = ApiConfig::load().context("loading configuration")?;
    info!(
        addr = %config.listen_addr(),
        db_host = %config.db.host,
        db_name = %config.db.database,
        disclosure = ?config.disclosure,
        "Configuration loaded"
    );

    let db = Database::new(config.db.clone())
        .await
        .context("connecting to PostgreSQL")?;
    let (total, applied) = migrations::migration_status(db.pool())
        .await
        .context("reading migration status")?;
    info!(total, applied, "Connected to PostgreSQL");

    let addr = config.listen_addr();
    let app = router(AppState::new(db.clone(), config));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "Phrasebook API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(%err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(%err, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown...");
}
