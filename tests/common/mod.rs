#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use tutortime_api::config::cors::CorsConfig;
use tutortime_api::config::jwt::JwtConfig;
use tutortime_api::modules::users::model::{NewUser, User, UserRole};
use tutortime_api::router::init_router;
use tutortime_api::state::AppState;
use tutortime_api::store::AdminStore;
use tutortime_api::store::memory::MemoryStore;
use tutortime_api::utils::email::{Mailer, RecordingMailer};
use tutortime_api::utils::jwt::create_access_token;

/// A fully wired application over the in-memory store and recording mailer.
pub struct TestApp {
    pub state: AppState,
    pub store: Arc<MemoryStore>,
    pub mailer: Arc<RecordingMailer>,
}

pub fn test_app() -> TestApp {
    test_app_with_mailer(RecordingMailer::new())
}

pub fn test_app_with_mailer(mailer: RecordingMailer) -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let mailer = Arc::new(mailer);

    let state = AppState::new(
        store.clone() as Arc<dyn AdminStore>,
        mailer.clone() as Arc<dyn Mailer>,
        JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry: 3600,
        },
        CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    );

    TestApp {
        state,
        store,
        mailer,
    }
}

impl TestApp {
    pub fn router(&self) -> Router {
        init_router(self.state.clone())
    }

    pub fn token_for_role(&self, role: UserRole) -> String {
        create_access_token(
            Uuid::new_v4(),
            &format!("{}@tutortime.dev", role.as_str()),
            role,
            &self.state.jwt_config,
        )
        .unwrap()
    }

    pub fn admin_token(&self) -> String {
        self.token_for_role(UserRole::Admin)
    }

    /// Seeds an account directly through the store.
    pub async fn seed_user(&self, email: &str, name: &str, role: UserRole) -> User {
        self.store
            .create_user(NewUser {
                email: email.to_string(),
                name: name.to_string(),
                role,
                department: None,
                subject: None,
                age: None,
                password: "seeded-password".to_string(),
            })
            .await
            .unwrap()
    }
}

/// Issues one request against the router and returns the status plus parsed
/// JSON body.
pub async fn request(
    router: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    // Framework-level rejections (e.g. malformed path parameters) answer with
    // plain text rather than JSON.
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}
