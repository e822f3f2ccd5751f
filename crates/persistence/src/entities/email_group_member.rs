//! Email group membership entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the email_group_members table.
#[derive(Debug, Clone, FromRow)]
pub struct EmailGroupMemberEntity {
    pub id: Uuid,
    pub email_group_id: Uuid,
    pub email_address_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<EmailGroupMemberEntity> for domain::models::EmailGroupMember {
    fn from(entity: EmailGroupMemberEntity) -> Self {
        Self {
            id: entity.id,
            email_group_id: entity.email_group_id,
            email_address_id: entity.email_address_id,
            created_at: entity.created_at,
        }
    }
}
