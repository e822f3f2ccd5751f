//! Email group membership routes, nested under an organization's group.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{CreateEmailGroupMemberRequest, EmailGroupMember};
use persistence::repositories::{EmailGroupMemberRepository, EmailGroupRepository};
use shared::pagination::{PaginatedResponse, PaginationParams};
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

/// Resolve the group inside the organization; cross-tenant access reads
/// as absent.
async fn require_group(
    state: &AppState,
    organization_id: Uuid,
    group_id: Uuid,
) -> Result<(), ApiError> {
    let repo = EmailGroupRepository::new(state.pool.clone());
    repo.find_by_id(organization_id, group_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Email group not found".to_string()))?;
    Ok(())
}

/// GET /api/v1/organizations/:organization_id/email-groups/:group_id/members
pub async fn list_members(
    State(state): State<AppState>,
    Path((organization_id, group_id)): Path<(Uuid, Uuid)>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<EmailGroupMember>>, ApiError> {
    require_group(&state, organization_id, group_id).await?;

    let repo = EmailGroupMemberRepository::new(state.pool.clone());
    let (members, total) = repo.list(group_id, &params).await?;

    Ok(Json(PaginatedResponse::new(members, total, &params)))
}

/// POST /api/v1/organizations/:organization_id/email-groups/:group_id/members
pub async fn create_member(
    State(state): State<AppState>,
    Path((organization_id, group_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<CreateEmailGroupMemberRequest>,
) -> Result<(StatusCode, Json<EmailGroupMember>), ApiError> {
    require_group(&state, organization_id, group_id).await?;

    let repo = EmailGroupMemberRepository::new(state.pool.clone());
    let member = repo.create(group_id, request.email_address_id).await?;

    info!(
        organization_id = %organization_id,
        email_group_id = %group_id,
        email_address_id = %member.email_address_id,
        "Email group member added"
    );

    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /api/v1/organizations/:organization_id/email-groups/:group_id/members/:member_id
pub async fn get_member(
    State(state): State<AppState>,
    Path((organization_id, group_id, member_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<EmailGroupMember>, ApiError> {
    require_group(&state, organization_id, group_id).await?;

    let repo = EmailGroupMemberRepository::new(state.pool.clone());
    let member = repo
        .find_by_id(group_id, member_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Email group member not found".to_string()))?;

    Ok(Json(member))
}

/// DELETE /api/v1/organizations/:organization_id/email-groups/:group_id/members/:member_id
pub async fn delete_member(
    State(state): State<AppState>,
    Path((organization_id, group_id, member_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    require_group(&state, organization_id, group_id).await?;

    let repo = EmailGroupMemberRepository::new(state.pool.clone());
    let rows_affected = repo.delete(group_id, member_id).await?;

    if rows_affected == 0 {
        return Err(ApiError::NotFound("Email group member not found".to_string()));
    }

    info!(
        organization_id = %organization_id,
        email_group_id = %group_id,
        member_id = %member_id,
        "Email group member removed"
    );

    Ok(StatusCode::NO_CONTENT)
}
