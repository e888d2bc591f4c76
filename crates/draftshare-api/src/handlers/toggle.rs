//! Editor preview toggle.

use axum::extract::State;
use axum::{Form, Json};

use draftshare_service::ToggleRequest;

use crate::dto::response::{ApiResponse, ToggleData};
use crate::error::ToggleError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/preview/toggle
///
/// Form fields `post_ID`, `checked`, `_wpnonce`.
pub async fn toggle_preview(
    State(state): State<AppState>,
    auth: AuthUser,
    Form(request): Form<ToggleRequest>,
) -> Result<Json<ApiResponse<ToggleData>>, ToggleError> {
    let result = state.toggle.toggle(&auth, &request).await?;
    Ok(Json(ApiResponse::ok(result.into())))
}
