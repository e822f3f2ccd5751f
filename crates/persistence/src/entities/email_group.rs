//! Email group entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the email_groups table.
#[derive(Debug, Clone, FromRow)]
pub struct EmailGroupEntity {
    pub id: Uuid,
    pub name: String,
    pub organization_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<EmailGroupEntity> for domain::models::EmailGroup {
    fn from(entity: EmailGroupEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            organization_id: entity.organization_id,
            created_at: entity.created_at,
        }
    }
}
