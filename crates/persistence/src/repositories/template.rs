//! Template repository for database operations.

use domain::models::{CreateTemplateRequest, Template};
use shared::pagination::PaginationParams;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::TemplateEntity;
use crate::metrics::QueryTimer;

/// Repository for template database operations, scoped by organization.
#[derive(Clone)]
pub struct TemplateRepository {
    pool: PgPool,
}

impl TemplateRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new template under an organization.
    pub async fn create(
        &self,
        organization_id: Uuid,
        request: &CreateTemplateRequest,
    ) -> Result<Template, sqlx::Error> {
        let timer = QueryTimer::new("create_template");
        let entity = sqlx::query_as::<_, TemplateEntity>(
            r#"
            INSERT INTO templates (name, html, organization_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, html, organization_id, created_at
            "#,
        )
        .bind(&request.name)
        .bind(&request.html)
        .bind(organization_id)
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        Ok(entity.into())
    }

    /// Find a template by ID within an organization.
    pub async fn find_by_id(
        &self,
        organization_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Template>, sqlx::Error> {
        let timer = QueryTimer::new("find_template_by_id");
        let entity = sqlx::query_as::<_, TemplateEntity>(
            r#"
            SELECT id, name, html, organization_id, created_at
            FROM templates
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

    /// List an organization's templates with pagination, newest first.
    pub async fn list(
        &self,
        organization_id: Uuid,
        params: &PaginationParams,
    ) -> Result<(Vec<Template>, i64), sqlx::Error> {
        let timer = QueryTimer::new("list_templates");

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM templates WHERE organization_id = $1")
                .bind(organization_id)
                .fetch_one(&self.pool)
                .await?;

        let entities = sqlx::query_as::<_, TemplateEntity>(
            r#"
            SELECT id, name, html, organization_id, created_at
            FROM templates
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
