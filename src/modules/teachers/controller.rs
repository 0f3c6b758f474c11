use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::modules::teachers::model::{CreateTeacherDto, TeacherWithAppointments, UpdateTeacherDto};
use crate::modules::teachers::service::TeacherService;
use crate::modules::users::model::{User, UserRole};
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::utils::filter::strip_protected_fields;

/// Create a teacher account.
///
/// Whatever role the client supplies is overwritten with `teacher` before the
/// account is created. A duplicate email is an application-level failure
/// (`FAIL` body), not an HTTP error.
#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = CreateTeacherDto,
    responses(
        (status = 200, description = "Teacher created, or email already in use", body = User),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Admin-only access", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn create_teacher(
    State(state): State<AppState>,
    Json(dto): Json<CreateTeacherDto>,
) -> Result<Json<Value>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(format!("Validation failed: {}", e)))?;

    let dto = dto.with_role(UserRole::Teacher);

    match TeacherService::create_teacher(state.store.as_ref(), dto.into_new_user()).await? {
        Some(user) => Ok(Json(json!({
            "status": "SUCCESS",
            "data": { "user": user },
        }))),
        None => Ok(Json(json!({
            "status": "FAIL",
            "message": "Email already in use",
        }))),
    }
}

/// List all teacher accounts with their appointments.
#[utoipa::path(
    get,
    path = "/api/teachers",
    responses(
        (status = 200, description = "List of teachers", body = Vec<TeacherWithAppointments>),
        (status = 401, description = "Admin-only access", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let teachers = TeacherService::get_teachers(state.store.as_ref()).await?;

    Ok(Json(json!({
        "status": "SUCCESS",
        "data": { "users": teachers },
    })))
}

/// Fetch a single teacher account by id.
#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Teacher details", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 401, description = "Admin-only access", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let user = TeacherService::get_teacher(state.store.as_ref(), id).await?;

    Ok(Json(json!({
        "status": "SUCCESS",
        "data": { "user": user },
    })))
}

/// Update a teacher account.
///
/// The raw payload is stripped of protected fields (email, role) before it is
/// deserialized into the allow-listed update DTO, so neither layer can smuggle
/// identity changes through an update.
#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Admin-only access", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, payload))]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let Value::Object(payload) = payload else {
        return Err(AppError::bad_request("Expected a JSON object"));
    };

    let filtered = strip_protected_fields(&payload);
    let dto: UpdateTeacherDto = serde_json::from_value(Value::Object(filtered))
        .map_err(|e| AppError::unprocessable(format!("Invalid update payload: {}", e)))?;

    dto.validate()
        .map_err(|e| AppError::unprocessable(format!("Validation failed: {}", e)))?;

    let user = TeacherService::update_teacher(state.store.as_ref(), id, dto.into_update()).await?;

    Ok(Json(json!({
        "status": "SUCCESS",
        "data": { "user": user },
    })))
}

/// Delete a teacher account, cascading to its appointments and messages.
#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Teacher and related records deleted"),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 401, description = "Admin-only access", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let summary = TeacherService::delete_teacher(state.store.as_ref(), id).await?;

    tracing::info!(
        appointments = summary.appointments_deleted,
        messages = summary.messages_deleted,
        "cascading delete completed"
    );

    Ok(Json(json!({
        "status": "SUCCESS",
        "message": "User, related appointments, and messages deleted",
    })))
}
