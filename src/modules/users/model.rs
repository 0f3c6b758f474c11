//! User account models shared by the teacher and student modules.
//!
//! A [`User`] is the single account record for every role on the platform.
//! Teachers carry `department`/`subject`, students carry `admission_status`;
//! the remaining fields are common.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Account role. Stored as the `user_role` Postgres enum.
#[derive(
    Serialize, Deserialize, sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, Default, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
    #[default]
    Student,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
        }
    }
}

/// An account on the platform.
///
/// The password hash never leaves the process: it is skipped during
/// serialization and defaulted during deserialization.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub department: Option<String>,
    pub subject: Option<String>,
    pub age: Option<i32>,
    #[serde(skip)]
    pub password: String,
    pub admission_status: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Input for inserting a new account. The password arrives in plain text and
/// is hashed by the store before it touches the database.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub department: Option<String>,
    pub subject: Option<String>,
    pub age: Option<i32>,
    pub password: String,
}

/// Allow-listed fields an account update may change. Everything absent stays
/// untouched; email and role are not representable here at all.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub department: Option<String>,
    pub subject: Option<String>,
    pub age: Option<i32>,
}
