//! Expiration settings (admin).

use axum::Json;
use axum::extract::State;
use validator::Validate;

use draftshare_core::error::AppError;

use crate::dto::request::UpdateExpirationRequest;
use crate::dto::response::{ApiResponse, ExpirationResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/settings/expiration
pub async fn get_expiration(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<ExpirationResponse>>, ApiError> {
    let policy = state.settings.expiration(&auth).await?;
    Ok(Json(ApiResponse::ok(policy.into())))
}

/// PUT /api/settings/expiration
pub async fn update_expiration(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateExpirationRequest>,
) -> Result<Json<ApiResponse<ExpirationResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let policy = state
        .settings
        .update_expiration(&auth, req.days, &req.time_of_day)
        .await?;
    Ok(Json(ApiResponse::ok(policy.into())))
}
