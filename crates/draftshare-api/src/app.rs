//! Application builder: wires router, middleware, and state into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use draftshare_core::config::AppConfig;
use draftshare_core::error::AppError;
use draftshare_core::types::ExpirationPolicy;
use draftshare_database::{DatabasePool, DocumentRepository, PgPolicySource, PgRegistryStore};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::{AppState, Collaborators};

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Collaborators backed by PostgreSQL.
pub fn postgres_collaborators(
    config: &AppConfig,
    db_pool: DatabasePool,
) -> Result<Collaborators, AppError> {
    let fallback = ExpirationPolicy::parse(
        config.preview.default_expiration_days,
        &config.preview.default_expiration_time,
    )?;
    let pool = db_pool.pool().clone();

    Ok(Collaborators {
        registry_store: Arc::new(PgRegistryStore::new(
            pool.clone(),
            config.preview.registry_key.clone(),
        )),
        documents: Arc::new(DocumentRepository::new(pool.clone())),
        policy: Arc::new(PgPolicySource::new(pool, fallback)),
        db_pool: Some(db_pool),
    })
}

/// Runs the DraftShare server until Ctrl+C.
pub async fn run_server(config: AppConfig, db_pool: DatabasePool) -> Result<(), AppError> {
    info!("Starting DraftShare server");

    if config.auth.nonce_secret == "CHANGE_ME_IN_PRODUCTION" {
        warn!("auth.nonce_secret is the built-in default; preview links are forgeable");
    }

    let collaborators = postgres_collaborators(&config, db_pool.clone())?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = AppState::build(config, collaborators)?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(addr = %addr, "DraftShare server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!(grace_seconds = grace.as_secs(), "Shutting down");
    tokio::time::timeout(grace, db_pool.close())
        .await
        .map_err(|_| AppError::internal("Timed out closing database pool"))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
