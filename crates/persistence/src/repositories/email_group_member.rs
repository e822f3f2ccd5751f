//! Email group membership repository for database operations.

use domain::models::EmailGroupMember;
use shared::pagination::PaginationParams;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::EmailGroupMemberEntity;
use crate::metrics::QueryTimer;

/// Repository for email group membership rows.
#[derive(Clone)]
pub struct EmailGroupMemberRepository {
    pool: PgPool,
}

impl EmailGroupMemberRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add an email address to a group.
    ///
    /// The (email_group_id, email_address_id) pair is unique; re-adding a
    /// member surfaces as a 23505 database error.
    pub async fn create(
        &self,
        email_group_id: Uuid,
        email_address_id: Uuid,
    ) -> Result<EmailGroupMember, sqlx::Error> {
        let timer = QueryTimer::new("create_email_group_member");
        let entity = sqlx::query_as::<_, EmailGroupMemberEntity>(
            r#"
            INSERT INTO email_group_members (email_group_id, email_address_id)
            VALUES ($1, $2)
            RETURNING id, email_group_id, email_address_id, created_at
            "#,
        )
        .bind(email_group_id)
        .bind(email_address_id)
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        Ok(entity.into())
    }

    /// Find a membership row by ID within a group.
    pub async fn find_by_id(
        &self,
        email_group_id: Uuid,
        id: Uuid,
    ) -> Result<Option<EmailGroupMember>, sqlx::Error> {
        let timer = QueryTimer::new("find_email_group_member_by_id");
        let entity = sqlx::query_as::<_, EmailGroupMemberEntity>(
            r#"
            SELECT id, email_group_id, email_address_id, created_at
            FROM email_group_members
            WHERE id = $1 AND email_group_id = $2
            "#,
        )
        .bind(id)
        .bind(email_group_id)
        .fetch_optional(&self.pool)
        .await?;
        timer.record();

        Ok(entity.map(Into::into))
    }

    /// List a group's membership rows with pagination, newest first.
    pub async fn list(
        &self,
        email_group_id: Uuid,
        params: &PaginationParams,
    ) -> Result<(Vec<EmailGroupMember>, i64), sqlx::Error> {
        let timer = QueryTimer::new("list_email_group_members");

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM email_group_members WHERE email_group_id = $1",
        )
        .bind(email_group_id)
        .fetch_one(&self.pool)
        .await?;

        let entities = sqlx::query_as::<_, EmailGroupMemberEntity>(
            r#"
            SELECT id, email_group_id, email_address_id, created_at
            FROM email_group_members
            WHERE email_group_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(email_group_id)
        .bind(params.page_size())
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await?;
        timer.record();

        Ok((entities.into_iter().map(Into::into).collect(), total))
    }

    /// Remove a membership row from a group.
    ///
    /// Returns the number of rows deleted (0 when the member was absent).
    pub async fn delete(&self, email_group_id: Uuid, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_email_group_member");
        let result = sqlx::query(
            "DELETE FROM email_group_members WHERE email_group_id = $1 AND id = $2",
        )
        .bind(email_group_id)
        .bind(id)
        .execute(&self.pool)
        .await?;
        timer.record();

        Ok(result.rows_affected())
    }
}
