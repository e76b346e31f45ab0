//! Auth handlers — login, logout, session probe, me.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use validator::Validate;

use brigade_auth::error::AuthError;
use brigade_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, SessionResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, bearer_token};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.authenticator.login(&req.username, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: outcome.issued.token,
        expires_at: outcome.issued.expires_at,
        account: outcome.account.into(),
    })))
}

/// POST /api/auth/logout
///
/// Revokes the presented token. Deliberately does not run the full
/// resolve chain: logging out an already-revoked token must succeed
/// again (idempotence), and an expired one is simply acknowledged.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let token = bearer_token(&headers).ok_or(AuthError::MissingToken)?;

    state.authenticator.logout(&token).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out".to_string(),
    })))
}

/// GET /api/auth/session
///
/// Reports whether the presented token currently resolves. Returns 200
/// for both outcomes so clients can probe without triggering auth
/// failures; storage faults still surface as errors.
pub async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<SessionResponse>>, ApiError> {
    let token = bearer_token(&headers);
    let valid = match state.authenticator.resolve(token.as_deref()).await {
        Ok(_) => true,
        Err(e) if e.is_denial() => false,
        Err(e) => return Err(e.into()),
    };

    Ok(Json(ApiResponse::ok(SessionResponse { valid })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<crate::dto::response::AccountResponse>>, ApiError> {
    let account = state.account_service.get_account(user.id()).await?;
    Ok(Json(ApiResponse::ok(account.into())))
}
