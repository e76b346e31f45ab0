//! Account record handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use brigade_core::error::AppError;
use brigade_entity::account::Role;
use brigade_service::account::{CreateAccountInput, UpdateAccountInput};

use crate::dto::request::{
    AccountIdsQuery, CreateAccountRequest, UpdateAccountRequest, UpdateCredentialsRequest,
};
use crate::dto::response::{AccountResponse, ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/accounts/{id}
pub async fn get_account(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    let account = state.account_service.get_account(id).await?;
    Ok(Json(ApiResponse::ok(account.into())))
}

/// GET /api/accounts?ids=a,b,c
pub async fn get_accounts(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<AccountIdsQuery>,
) -> Result<Json<ApiResponse<Vec<AccountResponse>>>, ApiError> {
    state.authorizer.authorize(&user.identity, Role::STAFF)?;

    let ids = query
        .parse()
        .map_err(|_| AppError::validation("Malformed account id in ids query"))?;

    let accounts = state.account_service.get_accounts(&ids).await?;
    Ok(Json(ApiResponse::ok(
        accounts.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/accounts/by-role/{role}
pub async fn list_by_role(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(role): Path<String>,
) -> Result<Json<ApiResponse<Vec<AccountResponse>>>, ApiError> {
    state.authorizer.authorize(&user.identity, Role::STAFF)?;

    let role: Role = role.parse()?;
    let accounts = state.account_service.list_by_role(role).await?;
    Ok(Json(ApiResponse::ok(
        accounts.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/accounts/graduated
pub async fn list_graduated(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<Vec<AccountResponse>>>, ApiError> {
    state.authorizer.authorize(&user.identity, Role::STAFF)?;

    let accounts = state.account_service.list_graduated().await?;
    Ok(Json(ApiResponse::ok(
        accounts.into_iter().map(Into::into).collect(),
    )))
}

/// POST /api/accounts
pub async fn create_account(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateAccountRequest>,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    state.authorizer.authorize(&user.identity, Role::OFFICERS)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let account = state
        .account_service
        .create_account(CreateAccountInput {
            account_name: req.account_name,
            user_name: req.user_name,
            password: req.password,
            role: req.role,
            rank: req.rank,
            level: req.level,
            class_group: req.class_group,
            credentials_note: req.credentials_note,
            honorific: req.honorific,
            appointment: req.appointment,
            roll_call: req.roll_call,
            graduated: req.graduated,
        })
        .await?;

    Ok(Json(ApiResponse::ok(account.into())))
}

/// PUT /api/accounts/{id}
pub async fn update_account(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAccountRequest>,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    state.authorizer.authorize(&user.identity, Role::STAFF)?;

    let account = state
        .account_service
        .update_account(
            id,
            UpdateAccountInput {
                account_name: req.account_name,
                user_name: req.user_name,
                password: req.password,
                role: req.role,
                rank: req.rank,
                level: req.level,
                class_group: req.class_group,
                credentials_note: req.credentials_note,
                honorific: req.honorific,
                appointment: req.appointment,
                roll_call: req.roll_call,
                graduated: req.graduated,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(account.into())))
}

/// PUT /api/accounts/me/credentials
pub async fn update_credentials(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<UpdateCredentialsRequest>,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    let account = state
        .account_service
        .update_credentials(user.id(), req.user_name, req.password)
        .await?;

    Ok(Json(ApiResponse::ok(account.into())))
}

/// DELETE /api/accounts/{id}
pub async fn delete_account(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    // The hierarchy guard compares against the authoritative stored role,
    // not the role frozen into the token at issuance.
    let actor = state.account_service.get_account(user.id()).await?;
    state.account_service.delete_account(&actor, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Account deleted".to_string(),
    })))
}
