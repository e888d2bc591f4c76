//! Registry listing.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, RegistrationsResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/preview/registrations
pub async fn list_registrations(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<RegistrationsResponse>>, ApiError> {
    let document_ids = state.registry.list().await?;
    Ok(Json(ApiResponse::ok(RegistrationsResponse {
        count: document_ids.len(),
        document_ids,
    })))
}
