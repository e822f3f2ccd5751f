//! Profile repository for database operations.

use domain::models::{CreateProfileRequest, Profile, UpdateProfileRequest};
use shared::pagination::PaginationParams;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ProfileEntity;
use crate::metrics::QueryTimer;

/// Repository for profile database operations, scoped by organization.
#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new profile under an organization.
    pub async fn create(
        &self,
        organization_id: Uuid,
        request: &CreateProfileRequest,
    ) -> Result<Profile, sqlx::Error> {
        let timer = QueryTimer::new("create_profile");
        let entity = sqlx::query_as::<_, ProfileEntity>(
            r#"
            INSERT INTO profiles (username, email, first_name, last_name, timezone, bio, picture_url, organization_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, username, email, first_name, last_name, timezone, bio, picture_url, organization_id, created_at
            "#,
        )
        .bind(&request.username)
        .bind(&request.email)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.timezone)
        .bind(&request.bio)
        .bind(&request.picture_url)
        .bind(organization_id)
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        Ok(entity.into())
    }

    /// Replace a profile's fields within an organization.
    ///
    /// Returns `Ok(None)` without writing when the profile does not exist
    /// in this organization.
    pub async fn update(
        &self,
        organization_id: Uuid,
        id: Uuid,
        request: &UpdateProfileRequest,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let timer = QueryTimer::new("update_profile");
        let entity = sqlx::query_as::<_, ProfileEntity>(
            r#"
            UPDATE profiles
            SET username = $3,
                email = $4,
                first_name = $5,
                last_name = $6,
                timezone = $7,
                bio = $8,
                picture_url = $9
            WHERE id = $1 AND organization_id = $2
            RETURNING id, username, email, first_name, last_name, timezone, bio, picture_url, organization_id, created_at
            "#,
        )
        .bind(id)
        .bind(organization_id)
        .bind(&request.username)
        .bind(&request.email)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.timezone)
        .bind(&request.bio)
        .bind(&request.picture_url)
        .fetch_optional(&self.pool)
        .await?;
        timer.record();

        Ok(entity.map(Into::into))
    }

    /// Find a profile by ID within an organization.
    ///
    /// The lookup filters by organization_id, so cross-tenant access reads
    /// as absent rather than forbidden.
    pub async fn find_by_id(
        &self,
        organization_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let timer = QueryTimer::new("find_profile_by_id");
        let entity = sqlx::query_as::<_, ProfileEntity>(
            r#"
            SELECT id, username, email, first_name, last_name, timezone, bio, picture_url, organization_id, created_at
            FROM profiles
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

    /// List an organization's profiles with pagination, newest first.
    pub async fn list(
        &self,
        organization_id: Uuid,
        params: &PaginationParams,
    ) -> Result<(Vec<Profile>, i64), sqlx::Error> {
        let timer = QueryTimer::new("list_profiles");

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM profiles WHERE organization_id = $1")
                .bind(organization_id)
                .fetch_one(&self.pool)
                .await?;

        let entities = sqlx::query_as::<_, ProfileEntity>(
            r#"
            SELECT id, username, email, first_name, last_name, timezone, bio, picture_url, organization_id, created_at
            FROM profiles
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
