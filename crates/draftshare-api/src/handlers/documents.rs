//! Per-document editor endpoints and lifecycle hooks.

use axum::Json;
use axum::extract::{Path, State};
use tracing::info;
use validator::Validate;

use draftshare_core::error::AppError;
use draftshare_service::PanelState;

use crate::dto::request::{SaveRequest, TransitionRequest};
use crate::dto::response::{ApiResponse, SaveResponse, TransitionResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, parse_document_id};
use crate::state::AppState;

/// GET /api/documents/{id}/preview
pub async fn preview_panel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PanelState>>, ApiError> {
    let id = parse_document_id(&id)?;
    let panel = state.toggle.panel(&auth, id).await?;
    Ok(Json(ApiResponse::ok(panel)))
}

/// POST /api/documents/{id}/saved
pub async fn document_saved(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<SaveRequest>,
) -> Result<Json<ApiResponse<SaveResponse>>, ApiError> {
    let id = parse_document_id(&id)?;
    let report = state.lifecycle.on_save(&auth, id, &req.into()).await?;
    Ok(Json(ApiResponse::ok(report.into())))
}

/// POST /api/documents/{id}/transition
pub async fn status_transition(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<TransitionRequest>,
) -> Result<Json<ApiResponse<TransitionResponse>>, ApiError> {
    let id = parse_document_id(&id)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let revoked = state
        .lifecycle
        .on_status_transition(id, &req.old_status, &req.new_status)
        .await?;
    if revoked {
        info!(document_id = %id, user_id = %auth.user_id, "Transition revoked preview");
    }
    Ok(Json(ApiResponse::ok(TransitionResponse { revoked })))
}
