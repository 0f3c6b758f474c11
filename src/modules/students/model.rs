use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::users::model::User;

/// Result of an approval run. Admission and notification are reported
/// separately: the admission update can commit while the email transport
/// fails, and callers need to tell the two apart.
#[derive(Debug, Clone)]
pub struct ApprovalOutcome {
    pub user: User,
    pub notification_sent: bool,
}

/// Response body for the approval endpoint.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct ApprovalStatus {
    pub admission_updated: bool,
    pub notification_sent: bool,
}
