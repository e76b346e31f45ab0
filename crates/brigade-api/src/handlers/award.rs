//! Awards scheme handlers.

use axum::Json;
use axum::extract::State;

use brigade_entity::account::Role;
use brigade_entity::award::Award;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/awards
///
/// Staff, or a Boy holding an appointment, may browse the scheme; the
/// appointment standing lives on the stored record, so the check runs
/// against the account rather than the token.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<Vec<Award>>>, ApiError> {
    let account = state.account_service.get_account(user.id()).await?;
    state.authorizer.authorize_member(&account, Role::STAFF)?;

    let awards = state.award_service.list().await?;
    Ok(Json(ApiResponse::ok(awards)))
}
