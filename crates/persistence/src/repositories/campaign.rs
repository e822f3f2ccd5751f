//! Campaign repository: lifecycle reads/writes and the transactional
//! association rewrite.
//!
//! The update path runs as a single transaction: the campaign row is
//! locked, then name, template associations, email-group associations, and
//! status are applied in that fixed order. Readers never observe a partial
//! delete-without-reinsert; only the pre- and post-commit states are
//! visible. Concurrent updates on the same campaign are last-committed-wins
//! at the isolation level Postgres provides.

use domain::models::{Campaign, CampaignStatus, EmailGroup, Template};
use shared::pagination::PaginationParams;
use sqlx::{PgPool, Postgres, Transaction};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::entities::{CampaignEntity, CampaignStatusDb, EmailGroupEntity, TemplateEntity};
use crate::metrics::QueryTimer;

/// Partial changes applied by [`CampaignRepository::update`].
///
/// `None` means "leave unchanged"; `Some(vec![])` on an association list
/// clears the relation.
#[derive(Debug, Clone, Default)]
pub struct CampaignChanges {
    pub name: Option<String>,
    pub status: Option<CampaignStatus>,
    pub template_ids: Option<Vec<Uuid>>,
    pub email_group_ids: Option<Vec<Uuid>>,
}

/// Result of a committed campaign update.
///
/// Carries the status recorded before the transaction so the caller can
/// decide whether the launched-event hook fires.
#[derive(Debug, Clone)]
pub struct CampaignUpdate {
    pub campaign: Campaign,
    pub previous_status: CampaignStatus,
}

/// Repository for campaign database operations, scoped by organization.
#[derive(Clone)]
pub struct CampaignRepository {
    pool: PgPool,
}

impl CampaignRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List an organization's campaigns with pagination, newest first.
    ///
    /// Associations are not loaded here; they are a read-by-id enrichment.
    pub async fn list(
        &self,
        organization_id: Uuid,
        params: &PaginationParams,
    ) -> Result<(Vec<Campaign>, i64), sqlx::Error> {
        let timer = QueryTimer::new("list_campaigns");

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM campaigns WHERE organization_id = $1")
                .bind(organization_id)
                .fetch_one(&self.pool)
                .await?;

        let entities = sqlx::query_as::<_, CampaignEntity>(
            r#"
            SELECT id, name, status, organization_id, created_at
            FROM campaigns
            WHERE organization_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(organization_id)
        .bind(params.page_size())
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await?;
        timer.record();

        Ok((entities.into_iter().map(Into::into).collect(), total))
    }

    /// Find a campaign by ID within an organization, with its associated
    /// templates and email groups eagerly loaded.
    ///
    /// A campaign with no associations yields empty collections, not null.
    pub async fn find_by_id(
        &self,
        organization_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let timer = QueryTimer::new("find_campaign_by_id");
        let entity = sqlx::query_as::<_, CampaignEntity>(
            r#"
            SELECT id, name, status, organization_id, created_at
            FROM campaigns
            WHERE id = $1 AND organization_id = $2
            "#,
        )
        .bind(id)
        .bind(organization_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(entity) = entity else {
            timer.record();
            return Ok(None);
        };

        let templates = sqlx::query_as::<_, TemplateEntity>(
            r#"
            SELECT t.id, t.name, t.html, t.organization_id, t.created_at
            FROM templates t
            JOIN campaign_templates ct ON ct.template_id = t.id
            WHERE ct.campaign_id = $1 AND t.organization_id = $2
            ORDER BY t.created_at DESC
            "#,
        )
        .bind(id)
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        let email_groups = sqlx::query_as::<_, EmailGroupEntity>(
            r#"
            SELECT g.id, g.name, g.organization_id, g.created_at
            FROM email_groups g
            JOIN email_group_campaigns egc ON egc.email_group_id = g.id
            WHERE egc.campaign_id = $1 AND g.organization_id = $2
            ORDER BY g.created_at DESC
            "#,
        )
        .bind(id)
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;
        timer.record();

        let mut campaign: Campaign = entity.into();
        campaign.templates = templates.into_iter().map(Template::from).collect();
        campaign.email_groups = email_groups.into_iter().map(EmailGroup::from).collect();

        Ok(Some(campaign))
    }

    /// Create a new campaign under an organization.
    ///
    /// Status is always `draft` on create, regardless of caller input.
    pub async fn create(
        &self,
        organization_id: Uuid,
        name: &str,
    ) -> Result<Campaign, sqlx::Error> {
        let timer = QueryTimer::new("create_campaign");
        let entity = sqlx::query_as::<_, CampaignEntity>(
            r#"
            INSERT INTO campaigns (name, status, organization_id)
            VALUES ($1, 'draft', $2)
            RETURNING id, name, status, organization_id, created_at
            "#,
        )
        .bind(name)
        .bind(organization_id)
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        Ok(entity.into())
    }

    /// Apply a partial update to a campaign as a single transaction.
    ///
    /// Order within the transaction: lock the row, update name, replace
    /// template associations, replace email-group associations, update
    /// status, commit. Any failure drops the transaction uncommitted and
    /// the campaign keeps its pre-update state. Returns `Ok(None)` without
    /// writing when the campaign does not exist in this organization.
    pub async fn update(
        &self,
        organization_id: Uuid,
        id: Uuid,
        changes: &CampaignChanges,
    ) -> Result<Option<CampaignUpdate>, sqlx::Error> {
        let timer = QueryTimer::new("update_campaign");
        let mut tx = self.pool.begin().await?;

        // Lock the row for the duration of the association rewrite so
        // concurrent updates on the same campaign serialize here.
        let current = sqlx::query_as::<_, CampaignEntity>(
            r#"
            SELECT id, name, status, organization_id, created_at
            FROM campaigns
            WHERE id = $1 AND organization_id = $2
            FOR UPDATE
            "#,
        )
        .bind(id)
        .bind(organization_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(current) = current else {
            timer.record();
            return Ok(None);
        };
        let previous_status: CampaignStatus = current.status.into();

        if let Some(ref name) = changes.name {
            if !name.trim().is_empty() {
                sqlx::query("UPDATE campaigns SET name = $2 WHERE id = $1")
                    .bind(id)
                    .bind(name)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        if let Some(ref template_ids) = changes.template_ids {
            replace_campaign_templates(&mut tx, organization_id, id, template_ids).await?;
        }

        if let Some(ref email_group_ids) = changes.email_group_ids {
            replace_email_group_campaigns(&mut tx, organization_id, id, email_group_ids).await?;
        }

        if let Some(status) = changes.status {
            sqlx::query("UPDATE campaigns SET status = $2 WHERE id = $1")
                .bind(id)
                .bind(CampaignStatusDb::from(status))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        timer.record();

        // Re-fetch so the response reflects the committed associations.
        let campaign = self
            .find_by_id(organization_id, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        Ok(Some(CampaignUpdate {
            campaign,
            previous_status,
        }))
    }

    /// Distinct email addresses reachable through a campaign's email
    /// groups, used to build the launched-event payload.
    pub async fn launch_recipients(
        &self,
        organization_id: Uuid,
        id: Uuid,
    ) -> Result<Vec<String>, sqlx::Error> {
        let timer = QueryTimer::new("campaign_launch_recipients");
        let addresses: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT ea.address
            FROM email_addresses ea
            JOIN email_group_members egm ON egm.email_address_id = ea.id
            JOIN email_group_campaigns egc ON egc.email_group_id = egm.email_group_id
            JOIN campaigns c ON c.id = egc.campaign_id
            WHERE c.id = $1 AND c.organization_id = $2
            "#,
        )
        .bind(id)
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;
        timer.record();

        Ok(addresses)
    }
}

/// Collapse duplicate ids so insert counts compare against a set.
fn dedupe_ids(ids: &[Uuid]) -> Vec<Uuid> {
    ids.iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Make campaign_templates match the supplied template set.
///
/// Delete-then-reinsert inside the caller's transaction. The insert only
/// takes templates that belong to the campaign's organization; an unknown
/// or cross-organization id shows up as an inserted-row shortfall and
/// aborts the whole transaction with `RowNotFound`.
async fn replace_campaign_templates(
    tx: &mut Transaction<'_, Postgres>,
    organization_id: Uuid,
    campaign_id: Uuid,
    template_ids: &[Uuid],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM campaign_templates WHERE campaign_id = $1")
        .bind(campaign_id)
        .execute(&mut **tx)
        .await?;

    let ids = dedupe_ids(template_ids);
    if ids.is_empty() {
        return Ok(());
    }

    let inserted = sqlx::query(
        r#"
        INSERT INTO campaign_templates (campaign_id, template_id)
        SELECT $1, t.id
        FROM templates t
        WHERE t.id = ANY($2) AND t.organization_id = $3
        "#,
    )
    .bind(campaign_id)
    .bind(&ids)
    .bind(organization_id)
    .execute(&mut **tx)
    .await?
    .rows_affected();

    if inserted != ids.len() as u64 {
        return Err(sqlx::Error::RowNotFound);
    }

    Ok(())
}

/// Make email_group_campaigns match the supplied email-group set.
///
/// Same contract as [`replace_campaign_templates`]: groups outside the
/// campaign's organization abort the transaction.
async fn replace_email_group_campaigns(
    tx: &mut Transaction<'_, Postgres>,
    organization_id: Uuid,
    campaign_id: Uuid,
    email_group_ids: &[Uuid],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM email_group_campaigns WHERE campaign_id = $1")
        .bind(campaign_id)
        .execute(&mut **tx)
        .await?;

    let ids = dedupe_ids(email_group_ids);
    if ids.is_empty() {
        return Ok(());
    }

    let inserted = sqlx::query(
        r#"
        INSERT INTO email_group_campaigns (campaign_id, email_group_id)
        SELECT $1, g.id
        FROM email_groups g
        WHERE g.id = ANY($2) AND g.organization_id = $3
        "#,
    )
    .bind(campaign_id)
    .bind(&ids)
    .bind(organization_id)
    .execute(&mut **tx)
    .await?
    .rows_affected();

    if inserted != ids.len() as u64 {
        return Err(sqlx::Error::RowNotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_ids_collapses_duplicates() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let deduped = dedupe_ids(&[a, b, a, a]);
        assert_eq!(deduped.len(), 2);
        assert!(deduped.contains(&a));
        assert!(deduped.contains(&b));
    }

    #[test]
    fn test_dedupe_ids_empty() {
        assert!(dedupe_ids(&[]).is_empty());
    }
}
