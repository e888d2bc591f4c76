//! # draftshare-api
//!
//! HTTP API layer for DraftShare built on Axum.
//!
//! Serves the public preview surface at `/` and the editor endpoints under
//! `/api`, with CORS, compression, tracing, and request logging layers.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::{AppState, Collaborators};
