use tracing::instrument;
use uuid::Uuid;

use crate::modules::students::model::ApprovalOutcome;
use crate::store::AdminStore;
use crate::utils::email::{Mailer, admission_approved_email};
use crate::utils::errors::AppError;

pub struct StudentService;

impl StudentService {
    /// Approves a pending student and notifies them by email.
    ///
    /// The admission update is role-scoped: only an account whose role is
    /// `student` matches, anything else is "Student not found". The email is
    /// sent after the update commits; a transport failure is logged and
    /// reported through [`ApprovalOutcome::notification_sent`] instead of
    /// failing the whole operation.
    #[instrument(skip(store, mailer))]
    pub async fn approve_student(
        store: &dyn AdminStore,
        mailer: &dyn Mailer,
        id: Uuid,
    ) -> Result<ApprovalOutcome, AppError> {
        let user = store
            .approve_student(id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found"))?;

        let message = admission_approved_email(&user.email, &user.name);
        let notification_sent = match mailer.send_mail(message).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(
                    student = %user.email,
                    error = %err.error,
                    "approval notification failed to send"
                );
                false
            }
        };

        Ok(ApprovalOutcome {
            user,
            notification_sent,
        })
    }

    /// Deletes a student account by id. Deleting an id that does not exist is
    /// a no-op, not an error.
    #[instrument(skip(store))]
    pub async fn delete_student(store: &dyn AdminStore, id: Uuid) -> Result<(), AppError> {
        let existed = store.delete_user(id).await?;
        if !existed {
            tracing::debug!(%id, "delete targeted a nonexistent student");
        }
        Ok(())
    }
}
