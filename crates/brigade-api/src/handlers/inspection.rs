//! Uniform inspection handlers.

use axum::Json;
use axum::extract::State;

use brigade_entity::account::Role;
use brigade_entity::inspection::InspectionSummary;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/inspections/summary
pub async fn summary(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<InspectionSummary>>, ApiError> {
    state.authorizer.authorize(&user.identity, Role::STAFF)?;

    let summary = state.inspection_service.summary().await?;
    Ok(Json(ApiResponse::ok(summary)))
}
