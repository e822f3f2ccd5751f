//! Email address entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the email_addresses table.
#[derive(Debug, Clone, FromRow)]
pub struct EmailAddressEntity {
    pub id: Uuid,
    pub address: String,
    pub organization_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<EmailAddressEntity> for domain::models::EmailAddress {
    fn from(entity: EmailAddressEntity) -> Self {
        Self {
            id: entity.id,
            address: entity.address,
            organization_id: entity.organization_id,
            created_at: entity.created_at,
        }
    }
}
