use std::collections::HashMap;

use tracing::instrument;
use uuid::Uuid;

use crate::modules::teachers::model::TeacherWithAppointments;
use crate::modules::users::model::{NewUser, User, UserRole, UserUpdate};
use crate::store::{AdminStore, CascadeSummary};
use crate::utils::errors::AppError;

pub struct TeacherService;

impl TeacherService {
    /// Creates a teacher account. Returns `Ok(None)` when the email is
    /// already taken; the controller renders that as a `FAIL` body rather
    /// than an HTTP error.
    #[instrument(skip(store, new_user), fields(email = %new_user.email))]
    pub async fn create_teacher(
        store: &dyn AdminStore,
        new_user: NewUser,
    ) -> Result<Option<User>, AppError> {
        if store.find_user_by_email(&new_user.email).await?.is_some() {
            return Ok(None);
        }

        let user = store.create_user(new_user).await?;
        Ok(Some(user))
    }

    /// All teacher accounts, each with the appointments created from it.
    #[instrument(skip(store))]
    pub async fn get_teachers(
        store: &dyn AdminStore,
    ) -> Result<Vec<TeacherWithAppointments>, AppError> {
        let teachers = store.find_users_by_role(UserRole::Teacher).await?;

        let emails: Vec<String> = teachers.iter().map(|t| t.email.clone()).collect();
        let appointments = store.appointments_by_emails(&emails).await?;

        let mut by_email: HashMap<String, Vec<_>> = HashMap::new();
        for appointment in appointments {
            by_email
                .entry(appointment.send_by.clone())
                .or_default()
                .push(appointment);
        }

        Ok(teachers
            .into_iter()
            .map(|user| {
                let appointments = by_email.remove(&user.email).unwrap_or_default();
                TeacherWithAppointments { user, appointments }
            })
            .collect())
    }

    #[instrument(skip(store))]
    pub async fn get_teacher(store: &dyn AdminStore, id: Uuid) -> Result<User, AppError> {
        store
            .find_user_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    #[instrument(skip(store, update))]
    pub async fn update_teacher(
        store: &dyn AdminStore,
        id: Uuid,
        update: UserUpdate,
    ) -> Result<User, AppError> {
        store
            .update_user(id, update)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Deletes the account and, in the same transaction, every appointment
    /// and message tied to its email.
    #[instrument(skip(store))]
    pub async fn delete_teacher(
        store: &dyn AdminStore,
        id: Uuid,
    ) -> Result<CascadeSummary, AppError> {
        store
            .delete_user_cascade(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
