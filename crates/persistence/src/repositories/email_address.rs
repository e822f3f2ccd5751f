//! Email address repository for database operations.

use domain::models::EmailAddress;
use shared::pagination::PaginationParams;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::EmailAddressEntity;
use crate::metrics::QueryTimer;

/// Repository for email address database operations, scoped by organization.
#[derive(Clone)]
pub struct EmailAddressRepository {
    pool: PgPool,
}

impl EmailAddressRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new email address under an organization.
    pub async fn create(
        &self,
        organization_id: Uuid,
        address: &str,
    ) -> Result<EmailAddress, sqlx::Error> {
        let timer = QueryTimer::new("create_email_address");
        let entity = sqlx::query_as::<_, EmailAddressEntity>(
            r#"
            INSERT INTO email_addresses (address, organization_id)
            VALUES ($1, $2)
            RETURNING id, address, organization_id, created_at
            "#,
        )
        .bind(address)
        .bind(organization_id)
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        Ok(entity.into())
    }

    /// Find an email address by ID within an organization.
    pub async fn find_by_id(
        &self,
        organization_id: Uuid,
        id: Uuid,
    ) -> Result<Option<EmailAddress>, sqlx::Error> {
        let timer = QueryTimer::new("find_email_address_by_id");
        let entity = sqlx::query_as::<_, EmailAddressEntity>(
            r#"
            SELECT id, address, organization_id, created_at
            FROM email_addresses
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

    /// List an organization's email addresses with pagination, newest first.
    pub async fn list(
        &self,
        organization_id: Uuid,
        params: &PaginationParams,
    ) -> Result<(Vec<EmailAddress>, i64), sqlx::Error> {
        let timer = QueryTimer::new("list_email_addresses");

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM email_addresses WHERE organization_id = $1")
                .bind(organization_id)
                .fetch_one(&self.pool)
                .await?;

        let entities = sqlx::query_as::<_, EmailAddressEntity>(
            r#"
            SELECT id, address, organization_id, created_at
            FROM email_addresses
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
