//! Campaign entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::CampaignStatus;
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for campaign_status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "campaign_status", rename_all = "lowercase")]
pub enum CampaignStatusDb {
    Draft,
    Scheduled,
    Launched,
}

impl From<CampaignStatusDb> for CampaignStatus {
    fn from(db: CampaignStatusDb) -> Self {
        match db {
            CampaignStatusDb::Draft => Self::Draft,
            CampaignStatusDb::Scheduled => Self::Scheduled,
            CampaignStatusDb::Launched => Self::Launched,
        }
    }
}

impl From<CampaignStatus> for CampaignStatusDb {
    fn from(status: CampaignStatus) -> Self {
        match status {
            CampaignStatus::Draft => Self::Draft,
            CampaignStatus::Scheduled => Self::Scheduled,
            CampaignStatus::Launched => Self::Launched,
        }
    }
}

/// Database row mapping for the campaigns table.
///
/// A bare row; the associated template and email-group collections are
/// loaded separately and attached by the repository.
#[derive(Debug, Clone, FromRow)]
pub struct CampaignEntity {
    pub id: Uuid,
    pub name: String,
    pub status: CampaignStatusDb,
    pub organization_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<CampaignEntity> for domain::models::Campaign {
    fn from(entity: CampaignEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            status: entity.status.into(),
            organization_id: entity.organization_id,
            created_at: entity.created_at,
            templates: Vec::new(),
            email_groups: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_status_conversion() {
        assert_eq!(
            CampaignStatus::from(CampaignStatusDb::Draft),
            CampaignStatus::Draft
        );
        assert_eq!(
            CampaignStatus::from(CampaignStatusDb::Launched),
            CampaignStatus::Launched
        );
        assert_eq!(
            CampaignStatusDb::from(CampaignStatus::Scheduled),
            CampaignStatusDb::Scheduled
        );
    }

    #[test]
    fn test_campaign_entity_into_domain_has_empty_associations() {
        let entity = CampaignEntity {
            id: Uuid::new_v4(),
            name: "Spring Sale".to_string(),
            status: CampaignStatusDb::Draft,
            organization_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        let campaign: domain::models::Campaign = entity.into();
        assert!(campaign.templates.is_empty());
        assert!(campaign.email_groups.is_empty());
    }
}
