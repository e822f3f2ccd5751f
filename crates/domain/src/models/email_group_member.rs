//! Email group membership domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Junction row linking an email address into an email group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EmailGroupMember {
    pub id: Uuid,
    pub email_group_id: Uuid,
    pub email_address_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Request to add an email address to a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateEmailGroupMemberRequest {
    pub email_address_id: Uuid,
}
