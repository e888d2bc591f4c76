//! Route definitions for the DraftShare HTTP API.
//!
//! The public preview surface is mounted at `/`; editor endpoints are
//! nested under `/api`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with all routes and the request-logging middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(preview_routes())
        .merge(document_routes())
        .merge(settings_routes())
        .merge(health_routes());

    Router::new()
        .route("/", get(handlers::preview::open_preview))
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Toggle and registry listing.
fn preview_routes() -> Router<AppState> {
    Router::new()
        .route("/preview/toggle", post(handlers::toggle::toggle_preview))
        .route(
            "/preview/registrations",
            get(handlers::registrations::list_registrations),
        )
}

/// Editor panel state and lifecycle hooks.
fn document_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/documents/{id}/preview",
            get(handlers::documents::preview_panel),
        )
        .route(
            "/documents/{id}/saved",
            post(handlers::documents::document_saved),
        )
        .route(
            "/documents/{id}/transition",
            post(handlers::documents::status_transition),
        )
}

/// Expiration settings.
fn settings_routes() -> Router<AppState> {
    Router::new().route(
        "/settings/expiration",
        get(handlers::settings::get_expiration).put(handlers::settings::update_expiration),
    )
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
