//! Administrative handlers.

use axum::Json;
use axum::extract::State;

use brigade_entity::account::Role;

use crate::dto::response::{ApiResponse, CountResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/admin/tables
pub async fn list_tables(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    state.authorizer.authorize(&user.identity, &[Role::Admin])?;

    let tables = state.admin_service.list_tables().await?;
    Ok(Json(ApiResponse::ok(tables)))
}

/// DELETE /api/admin/tokens/expired
///
/// Runs the revocation ledger sweep on demand and reports the count.
pub async fn purge_expired_tokens(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    state.authorizer.authorize(&user.identity, &[Role::Admin])?;

    let count = state.admin_service.purge_expired_tokens().await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}
