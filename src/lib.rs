//! Content and engagement API for the Swadeshi Hind mobile app.
//!
//! Serves bilingual news with truth scores, yes/no polls, a daily quote, and
//! takes volunteer sign-ups and game scores. Everything lives in MongoDB; the
//! only write with real consistency requirements is the poll vote, which is a
//! single atomic `$inc` (see [`services::poll_service`]).

use std::sync::Arc;

use tokio::{net::TcpListener, signal};
use tracing::{error, info};

pub mod config;
pub mod controllers;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use config::{Config, StoreBackend};
use db::{memory_store::MemoryStore, mongo_store::MongoStore, seed::seed_if_empty};
use state::AppState;
use utils::error::{AppError, AppResult};

/// Connects storage, seeds it, and serves until Ctrl+C or SIGTERM.
pub async fn run(config: Config) -> AppResult<()> {
    controllers::health::mark_started();

    let (state, mongo_client) = match config.store_backend {
        StoreBackend::Mongo => {
            let (client, database) = db::connection::init_db(&config.mongo).await?;
            let store = Arc::new(MongoStore::new(database));
            seed_if_empty(store.as_ref()).await?;
            (AppState::new(store), Some(client))
        }
        StoreBackend::Memory => {
            info!("using in-memory store, data is lost on exit");
            let store = Arc::new(MemoryStore::new());
            seed_if_empty(store.as_ref()).await?;
            (AppState::new(store), None)
        }
    };

    let cors = routes::cors_layer(config.cors_origin.as_deref())?;
    let app = routes::app(state).layer(cors);

    let listener = TcpListener::bind(config.server_addr).await.map_err(|e| {
        AppError::InternalError(format!("Failed to bind to {}: {}", config.server_addr, e))
    })?;

    info!(addr = %config.server_addr, "server running");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)));

    if let Some(client) = mongo_client {
        client.shutdown().await;
        info!("MongoDB client closed");
    }

    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
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
}
