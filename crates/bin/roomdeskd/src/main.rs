//! # roomdeskd: roomdesk daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`roomdesk.toml` + env vars)
//! - Initialise `tracing` logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the room repository (adapter) and the room service
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use roomdesk_adapter_http_axum::state::AppState;
use roomdesk_adapter_storage_sqlite_sqlx::SqliteRoomRepository;
use roomdesk_app::services::room_service::RoomService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = roomdesk_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    tracing::info!(url = %config.database_url(), "database ready");

    // Services
    let room_service = RoomService::new(SqliteRoomRepository::new(db.pool().clone()));

    // HTTP
    let bind_addr = config.bind_addr();
    let state = AppState::new(room_service, config.trial);
    let app = roomdesk_adapter_http_axum::router::build(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "roomdeskd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.pool().close().await;
    tracing::info!("roomdeskd stopped");

    Ok(())
}

/// Resolve once SIGINT (Ctrl-C) or, on Unix, SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
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
