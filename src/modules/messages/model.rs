use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A direct message between two accounts, keyed by participant email. The
/// record's lifecycle is tied to both participants: deleting either account
/// removes it.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Message {
    pub id: Uuid,
    pub from_email: String,
    pub to_email: String,
    pub body: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Input for inserting a new message.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub from_email: String,
    pub to_email: String,
    pub body: String,
}
