//! Persistence collaborator for the admin API.
//!
//! [`AdminStore`] is the seam between handlers and storage: production uses
//! [`postgres::PgStore`], tests substitute [`memory::MemoryStore`]. The trait
//! covers exactly the operations the admin workflow needs; anything else the
//! platform stores is owned by other services.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::appointments::model::{Appointment, NewAppointment};
use crate::modules::messages::model::{Message, NewMessage};
use crate::modules::users::model::{NewUser, User, UserRole, UserUpdate};
use crate::utils::errors::AppError;

pub mod postgres;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

/// What a cascading account deletion removed alongside the account itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeSummary {
    pub appointments_deleted: u64,
    pub messages_deleted: u64,
}

#[async_trait]
pub trait AdminStore: Send + Sync + std::fmt::Debug {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;

    async fn find_users_by_role(&self, role: UserRole) -> Result<Vec<User>, AppError>;

    /// Inserts a new account, hashing the password before storage.
    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Applies the allow-listed fields to an account. Returns the post-update
    /// record, or `None` when no account has that id.
    async fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<Option<User>, AppError>;

    /// Sets the admission flag on a *student* account. The update is
    /// role-scoped: a matching id with any other role is left untouched and
    /// reported as `None`.
    async fn approve_student(&self, id: Uuid) -> Result<Option<User>, AppError>;

    /// Deletes an account by id. Returns whether a record existed.
    async fn delete_user(&self, id: Uuid) -> Result<bool, AppError>;

    /// Deletes an account together with its appointments (by creator email)
    /// and messages (by sender or recipient email), atomically. Returns
    /// `None` when no account has that id.
    async fn delete_user_cascade(&self, id: Uuid) -> Result<Option<CascadeSummary>, AppError>;

    /// Appointments created by any of the given emails, for attaching to
    /// teacher listings.
    async fn appointments_by_emails(
        &self,
        emails: &[String],
    ) -> Result<Vec<Appointment>, AppError>;

    async fn create_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<Appointment, AppError>;

    async fn create_message(&self, message: NewMessage) -> Result<Message, AppError>;

    /// Messages where the email appears as sender or recipient.
    async fn messages_by_email(&self, email: &str) -> Result<Vec<Message>, AppError>;
}
