use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A tutoring appointment. `send_by` is the email of the account that created
/// it; the appointment's lifecycle is tied to that account.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Appointment {
    pub id: Uuid,
    pub send_by: String,
    pub subject: Option<String>,
    pub starts_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Input for inserting a new appointment.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub send_by: String,
    pub subject: Option<String>,
    pub starts_at: chrono::DateTime<chrono::Utc>,
}
