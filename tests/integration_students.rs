mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{request, test_app, test_app_with_mailer};
use tutortime_api::modules::users::model::UserRole;
use tutortime_api::store::AdminStore;
use tutortime_api::utils::email::RecordingMailer;

#[tokio::test]
async fn approve_student_sets_admission_and_sends_one_email() {
    let app = test_app();
    let token = app.admin_token();
    let student = app
        .seed_user("pending@tutortime.dev", "Pending Pat", UserRole::Student)
        .await;
    assert!(!student.admission_status);

    let (status, body) = request(
        app.router(),
        Method::POST,
        &format!("/api/students/{}/approve", student.id),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "SUCCESS");
    assert_eq!(body["message"], "Student approved");
    assert_eq!(body["data"]["admission_updated"], true);
    assert_eq!(body["data"]["notification_sent"], true);

    let stored = app
        .store
        .find_user_by_id(student.id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.admission_status);

    let sent = app.mailer.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "pending@tutortime.dev");
    assert_eq!(sent[0].subject, "Account Approved");
}

#[tokio::test]
async fn approve_non_student_is_not_found_and_sends_nothing() {
    let app = test_app();
    let token = app.admin_token();
    let teacher = app
        .seed_user("teacher@tutortime.dev", "Teach", UserRole::Teacher)
        .await;

    let (status, body) = request(
        app.router(),
        Method::POST,
        &format!("/api/students/{}/approve", teacher.id),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "FAIL");
    assert_eq!(body["message"], "Student not found");
    assert!(app.mailer.sent_messages().is_empty());

    let stored = app
        .store
        .find_user_by_id(teacher.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.admission_status);
}

#[tokio::test]
async fn approval_survives_mail_transport_failure() {
    let app = test_app_with_mailer(RecordingMailer::failing());
    let token = app.admin_token();
    let student = app
        .seed_user("pending@tutortime.dev", "Pending Pat", UserRole::Student)
        .await;

    let (status, body) = request(
        app.router(),
        Method::POST,
        &format!("/api/students/{}/approve", student.id),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["admission_updated"], true);
    assert_eq!(body["data"]["notification_sent"], false);

    let stored = app
        .store
        .find_user_by_id(student.id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.admission_status);
}

#[tokio::test]
async fn delete_student_removes_the_account() {
    let app = test_app();
    let token = app.admin_token();
    let student = app
        .seed_user("leaving@tutortime.dev", "Leaving", UserRole::Student)
        .await;

    let (status, body) = request(
        app.router(),
        Method::DELETE,
        &format!("/api/students/{}", student.id),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "SUCCESS");
    assert_eq!(body["message"], "Student deleted");
    assert!(
        app.store
            .find_user_by_id(student.id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn delete_nonexistent_student_still_succeeds() {
    let app = test_app();
    let token = app.admin_token();

    let (status, body) = request(
        app.router(),
        Method::DELETE,
        &format!("/api/students/{}", uuid::Uuid::new_v4()),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "SUCCESS");
    assert_eq!(body["message"], "Student deleted");
}

#[tokio::test]
async fn approval_is_one_directional() {
    let app = test_app();
    let token = app.admin_token();
    let student = app
        .seed_user("pending@tutortime.dev", "Pat", UserRole::Student)
        .await;

    // Approving twice keeps the flag set and sends a mail per call; there is
    // no endpoint that can unset it.
    for _ in 0..2 {
        let (status, _) = request(
            app.router(),
            Method::POST,
            &format!("/api/students/{}/approve", student.id),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let stored = app
        .store
        .find_user_by_id(student.id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.admission_status);
}

#[tokio::test]
async fn approve_rejects_malformed_id() {
    let app = test_app();
    let token = app.admin_token();

    let (status, _) = request(
        app.router(),
        Method::POST,
        "/api/students/not-a-uuid/approve",
        Some(&token),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
