use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::appointments::model::Appointment;
use crate::modules::users::model::{NewUser, User, UserRole, UserUpdate};

/// DTO for creating a teacher account.
///
/// The client may send a `role` field but it carries no weight: the create
/// handler stamps [`UserRole::Teacher`] over it before the service runs.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateTeacherDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub department: Option<String>,
    pub subject: Option<String>,
    #[validate(range(min = 16, max = 120))]
    pub age: Option<i32>,
    #[serde(default)]
    pub role: UserRole,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub password_confirm: String,
}

impl CreateTeacherDto {
    /// Overwrites the intended role regardless of what the client supplied.
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn into_new_user(self) -> NewUser {
        NewUser {
            email: self.email,
            name: self.name,
            role: self.role,
            department: self.department,
            subject: self.subject,
            age: self.age,
            password: self.password,
        }
    }
}

/// Allow-listed update payload for a teacher account.
///
/// Email and role are deliberately absent: they cannot be changed through
/// updates, and the raw payload is additionally run through the protected
/// field filter before deserializing into this type.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
pub struct UpdateTeacherDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub department: Option<String>,
    pub subject: Option<String>,
    #[validate(range(min = 16, max = 120))]
    pub age: Option<i32>,
}

impl UpdateTeacherDto {
    pub fn into_update(self) -> UserUpdate {
        UserUpdate {
            name: self.name,
            department: self.department,
            subject: self.subject,
            age: self.age,
        }
    }
}

/// A teacher together with the appointments created from their account.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct TeacherWithAppointments {
    pub user: User,
    pub appointments: Vec<Appointment>,
}
