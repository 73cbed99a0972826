//! # terraind — terrain image daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`terrain.toml` + environment overrides)
//! - Initialise `tracing` with the configured filter
//! - Open the `SQLite` pool and run migrations
//! - Build the repository, the resource controller and the axum router
//! - Serve until SIGINT/SIGTERM, then close the pool
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use terrain_adapter_http_axum::state::AppState;
use terrain_adapter_storage_sqlite_sqlx::{Config as StorageConfig, SqliteTerrainImageRepository};
use terrain_app::services::terrain_image_controller::TerrainImageController;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    for rejected in &config.rejected_overrides {
        tracing::warn!(%rejected, "ignoring unusable environment override");
    }

    let db = StorageConfig {
        database_url: config.database.url.clone(),
    }
    .build()
    .await?;
    tracing::info!("database migrations applied");

    let repo = SqliteTerrainImageRepository::new(db.pool().clone());
    let state = AppState::new(TerrainImageController::new(repo));
    let app = terrain_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "terraind listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("terraind stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
