//! Organization repository for database operations.

use domain::models::Organization;
use shared::pagination::PaginationParams;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::OrganizationEntity;
use crate::metrics::QueryTimer;

/// Repository for organization database operations.
#[derive(Clone)]
pub struct OrganizationRepository {
    pool: PgPool,
}

impl OrganizationRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new organization.
    pub async fn create(&self, name: &str) -> Result<Organization, sqlx::Error> {
        let timer = QueryTimer::new("create_organization");
        let entity = sqlx::query_as::<_, OrganizationEntity>(
            r#"
            INSERT INTO organizations (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        Ok(entity.into())
    }

    /// Find organization by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Organization>, sqlx::Error> {
        let timer = QueryTimer::new("find_organization_by_id");
        let entity = sqlx::query_as::<_, OrganizationEntity>(
            r#"
            SELECT id, name, created_at
            FROM organizations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        timer.record();

        Ok(entity.map(Into::into))
    }

    /// List organizations with pagination, newest first.
    pub async fn list(
        &self,
        params: &PaginationParams,
    ) -> Result<(Vec<Organization>, i64), sqlx::Error> {
        let timer = QueryTimer::new("list_organizations");

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM organizations")
            .fetch_one(&self.pool)
            .await?;

        let entities = sqlx::query_as::<_, OrganizationEntity>(
            r#"
            SELECT id, name, created_at
            FROM organizations
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.page_size())
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await?;
        timer.record();

        Ok((entities.into_iter().map(Into::into).collect(), total))
    }
}
