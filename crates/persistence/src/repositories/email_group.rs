//! Email group repository for database operations.

use domain::models::EmailGroup;
use shared::pagination::PaginationParams;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::EmailGroupEntity;
use crate::metrics::QueryTimer;

/// Repository for email group database operations, scoped by organization.
#[derive(Clone)]
pub struct EmailGroupRepository {
    pool: PgPool,
}

impl EmailGroupRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new email group under an organization.
    pub async fn create(
        &self,
        organization_id: Uuid,
        name: &str,
    ) -> Result<EmailGroup, sqlx::Error> {
        let timer = QueryTimer::new("create_email_group");
        let entity = sqlx::query_as::<_, EmailGroupEntity>(
            r#"
            INSERT INTO email_groups (name, organization_id)
            VALUES ($1, $2)
            RETURNING id, name, organization_id, created_at
            "#,
        )
        .bind(name)
        .bind(organization_id)
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        Ok(entity.into())
    }

    /// Find an email group by ID within an organization.
    pub async fn find_by_id(
        &self,
        organization_id: Uuid,
        id: Uuid,
    ) -> Result<Option<EmailGroup>, sqlx::Error> {
        let timer = QueryTimer::new("find_email_group_by_id");
        let entity = sqlx::query_as::<_, EmailGroupEntity>(
            r#"
            SELECT id, name, organization_id, created_at
            FROM email_groups
            WHERE id = $1 AND organization_id = $2
            "#,
        )
        .bind(id)
        .bind(organization_id)
        .fetch_optional(&self.pool)
        .await?;
        timer.record();

        Ok(entity.map(Into::into))
    }

    /// List an organization's email groups with pagination, newest first.
    pub async fn list(
        &self,
        organization_id: Uuid,
        params: &PaginationParams,
    ) -> Result<(Vec<EmailGroup>, i64), sqlx::Error> {
        let timer = QueryTimer::new("list_email_groups");

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM email_groups WHERE organization_id = $1")
                .bind(organization_id)
                .fetch_one(&self.pool)
                .await?;

        let entities = sqlx::query_as::<_, EmailGroupEntity>(
            r#"
            SELECT id, name, organization_id, created_at
            FROM email_groups
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
}
