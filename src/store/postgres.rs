use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::appointments::model::{Appointment, NewAppointment};
use crate::modules::messages::model::{Message, NewMessage};
use crate::modules::users::model::{NewUser, User, UserRole, UserUpdate};
use crate::store::{AdminStore, CascadeSummary};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

/// PostgreSQL-backed store. Cheaply cloneable; the pool is shared.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(err: sqlx::Error, email: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            tracing::debug!(email, "duplicate email rejected by unique index");
            return AppError::bad_request("Email already in use");
        }
    }
    AppError::database(err)
}

#[async_trait]
impl AdminStore for PgStore {
    #[instrument(skip(self))]
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, role, department, subject, age, password,
                   admission_status, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, role, department, subject, age, password,
                   admission_status, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_users_by_role(&self, role: UserRole) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, role, department, subject, age, password,
                   admission_status, created_at, updated_at
            FROM users
            WHERE role = $1
            ORDER BY name
            "#,
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let hashed_password = hash_password(&new_user.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name, role, department, subject, age, password)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, email, name, role, department, subject, age, password,
                      admission_status, created_at, updated_at
            "#,
        )
        .bind(&new_user.email)
        .bind(&new_user.name)
        .bind(new_user.role)
        .bind(&new_user.department)
        .bind(&new_user.subject)
        .bind(new_user.age)
        .bind(&hashed_password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &new_user.email))?;

        Ok(user)
    }

    #[instrument(skip(self, update))]
    async fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                department = COALESCE($3, department),
                subject = COALESCE($4, subject),
                age = COALESCE($5, age),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, name, role, department, subject, age, password,
                      admission_status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.department)
        .bind(&update.subject)
        .bind(update.age)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn approve_student(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET admission_status = TRUE,
                updated_at = NOW()
            WHERE id = $1 AND role = $2
            RETURNING id, email, name, role, department, subject, age, password,
                      admission_status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(UserRole::Student)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_user_cascade(&self, id: Uuid) -> Result<Option<CascadeSummary>, AppError> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, role, department, subject, age, password,
                   admission_status, created_at, updated_at
            FROM users
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(user) = user else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let appointments_deleted = sqlx::query("DELETE FROM appointments WHERE send_by = $1")
            .bind(&user.email)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let messages_deleted =
            sqlx::query("DELETE FROM messages WHERE from_email = $1 OR to_email = $1")
                .bind(&user.email)
                .execute(&mut *tx)
                .await?
                .rows_affected();

        tx.commit().await?;

        Ok(Some(CascadeSummary {
            appointments_deleted,
            messages_deleted,
        }))
    }

    #[instrument(skip(self))]
    async fn appointments_by_emails(
        &self,
        emails: &[String],
    ) -> Result<Vec<Appointment>, AppError> {
        let appointments = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT id, send_by, subject, starts_at, created_at
            FROM appointments
            WHERE send_by = ANY($1)
            ORDER BY starts_at
            "#,
        )
        .bind(emails)
        .fetch_all(&self.pool)
        .await?;

        Ok(appointments)
    }

    #[instrument(skip(self, appointment))]
    async fn create_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<Appointment, AppError> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (send_by, subject, starts_at)
            VALUES ($1, $2, $3)
            RETURNING id, send_by, subject, starts_at, created_at
            "#,
        )
        .bind(&appointment.send_by)
        .bind(&appointment.subject)
        .bind(appointment.starts_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(appointment)
    }

    #[instrument(skip(self, message))]
    async fn create_message(&self, message: NewMessage) -> Result<Message, AppError> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (from_email, to_email, body)
            VALUES ($1, $2, $3)
            RETURNING id, from_email, to_email, body, created_at
            "#,
        )
        .bind(&message.from_email)
        .bind(&message.to_email)
        .bind(&message.body)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    #[instrument(skip(self))]
    async fn messages_by_email(&self, email: &str) -> Result<Vec<Message>, AppError> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, from_email, to_email, body, created_at
            FROM messages
            WHERE from_email = $1 OR to_email = $1
            ORDER BY created_at
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}
