mod common;

use axum::http::{Method, StatusCode};

use common::{request, test_app};
use tutortime_api::modules::users::model::UserRole;

#[tokio::test]
async fn admin_passes_the_guard() {
    let app = test_app();
    let token = app.admin_token();

    let (status, body) = request(app.router(), Method::GET, "/api/teachers", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "SUCCESS");
}

#[tokio::test]
async fn teacher_is_rejected_with_admin_only_access() {
    let app = test_app();
    let token = app.token_for_role(UserRole::Teacher);

    let (status, body) = request(app.router(), Method::GET, "/api/teachers", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], "FAIL");
    assert_eq!(body["message"], "Admin-only access");
}

#[tokio::test]
async fn student_is_rejected_from_student_routes_too() {
    let app = test_app();
    let token = app.token_for_role(UserRole::Student);
    let id = uuid::Uuid::new_v4();

    let (status, body) = request(
        app.router(),
        Method::DELETE,
        &format!("/api/students/{id}"),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Admin-only access");
}

#[tokio::test]
async fn missing_token_is_rejected() {
    let app = test_app();

    let (status, body) = request(app.router(), Method::GET, "/api/teachers", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing authorization header");
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let app = test_app();

    let (status, body) = request(
        app.router(),
        Method::GET,
        "/api/teachers",
        Some("not-a-jwt"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}
