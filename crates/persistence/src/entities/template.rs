//! Template entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the templates table.
#[derive(Debug, Clone, FromRow)]
pub struct TemplateEntity {
    pub id: Uuid,
    pub name: String,
    pub html: String,
    pub organization_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<TemplateEntity> for domain::models::Template {
    fn from(entity: TemplateEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            html: entity.html,
            organization_id: entity.organization_id,
            created_at: entity.created_at,
        }
    }
}
