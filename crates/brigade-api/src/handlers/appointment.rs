//! Appointment roster handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use brigade_core::error::AppError;
use brigade_entity::account::Role;
use brigade_entity::appointment::{Appointment, AppointmentRoster, NewAppointment};

use crate::dto::request::{CreateAppointmentRequest, ReassignAppointmentRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/appointments
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<ApiResponse<AppointmentRoster>>, ApiError> {
    let roster = state.appointment_service.list().await?;
    Ok(Json(ApiResponse::ok(roster)))
}

/// POST /api/appointments
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateAppointmentRequest>,
) -> Result<Json<ApiResponse<Appointment>>, ApiError> {
    state.authorizer.authorize(&user.identity, Role::OFFICERS)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let appointment = state
        .appointment_service
        .create(NewAppointment {
            appointment_name: req.appointment_name,
            role: req.role,
            account_id: req.account_id,
        })
        .await?;

    Ok(Json(ApiResponse::ok(appointment)))
}

/// PUT /api/appointments/{id}
pub async fn reassign(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ReassignAppointmentRequest>,
) -> Result<Json<ApiResponse<Appointment>>, ApiError> {
    state.authorizer.authorize(&user.identity, Role::OFFICERS)?;

    let appointment = state
        .appointment_service
        .reassign(id, req.account_id)
        .await?;

    Ok(Json(ApiResponse::ok(appointment)))
}

/// DELETE /api/appointments/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.authorizer.authorize(&user.identity, Role::OFFICERS)?;

    state.appointment_service.delete(id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Appointment deleted".to_string(),
    })))
}
