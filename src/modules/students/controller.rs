use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::students::model::ApprovalStatus;
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

/// Approve a pending student and send the admission notification.
#[utoipa::path(
    post,
    path = "/api/students/{id}/approve",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Student approved", body = ApprovalStatus),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 401, description = "Admin-only access", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn approve_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let outcome =
        StudentService::approve_student(state.store.as_ref(), state.mailer.as_ref(), id).await?;

    Ok(Json(json!({
        "status": "SUCCESS",
        "message": "Student approved",
        "data": ApprovalStatus {
            admission_updated: true,
            notification_sent: outcome.notification_sent,
        },
    })))
}

/// Delete a student account. Always succeeds, whether or not the id existed.
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Student deleted"),
        (status = 401, description = "Admin-only access", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    StudentService::delete_student(state.store.as_ref(), id).await?;

    Ok(Json(json!({
        "status": "SUCCESS",
        "message": "Student deleted",
    })))
}
