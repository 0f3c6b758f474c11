use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::email::EmailConfig;
use crate::config::jwt::JwtConfig;
use crate::store::AdminStore;
use crate::store::postgres::PgStore;
use crate::utils::email::{Mailer, SmtpMailer};

/// Shared application state. The store and mailer are injected as trait
/// objects so tests can substitute fakes; both are built once at startup and
/// shared read-only across requests.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<dyn AdminStore>,
    pub mailer: Arc<dyn Mailer>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn AdminStore>,
        mailer: Arc<dyn Mailer>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            store,
            mailer,
            jwt_config,
            cors_config,
        }
    }
}

/// Production state: PostgreSQL store and SMTP mailer, configured from the
/// environment.
pub async fn init_app_state() -> AppState {
    let pool = init_db_pool().await;

    AppState {
        store: Arc::new(PgStore::new(pool)),
        mailer: Arc::new(SmtpMailer::new(EmailConfig::from_env())),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
