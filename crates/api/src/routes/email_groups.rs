//! Email group routes, nested under an organization.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{CreateEmailGroupRequest, EmailGroup};
use persistence::repositories::EmailGroupRepository;
use shared::pagination::{PaginatedResponse, PaginationParams};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/v1/organizations/:organization_id/email-groups
pub async fn list_email_groups(
    State(state): State<AppState>,
    Path(organization_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<EmailGroup>>, ApiError> {
    let repo = EmailGroupRepository::new(state.pool.clone());
    let (groups, total) = repo.list(organization_id, &params).await?;

    Ok(Json(PaginatedResponse::new(groups, total, &params)))
}

/// GET /api/v1/organizations/:organization_id/email-groups/:id
pub async fn get_email_group(
    State(state): State<AppState>,
    Path((organization_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<EmailGroup>, ApiError> {
    let repo = EmailGroupRepository::new(state.pool.clone());
    let group = repo
        .find_by_id(organization_id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Email group not found".to_string()))?;

    Ok(Json(group))
}

/// POST /api/v1/organizations/:organization_id/email-groups
pub async fn create_email_group(
    State(state): State<AppState>,
    Path(organization_id): Path<Uuid>,
    Json(request): Json<CreateEmailGroupRequest>,
) -> Result<(StatusCode, Json<EmailGroup>), ApiError> {
    request.validate()?;

    let repo = EmailGroupRepository::new(state.pool.clone());
    let group = repo.create(organization_id, &request.name).await?;

    info!(
        organization_id = %organization_id,
        email_group_id = %group.id,
        name = %group.name,
        "Email group created"
    );

    Ok((StatusCode::CREATED, Json(group)))
}
