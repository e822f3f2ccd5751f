//! Organization routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{CreateOrganizationRequest, Organization};
use persistence::repositories::OrganizationRepository;
use shared::pagination::{PaginatedResponse, PaginationParams};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/v1/organizations
pub async fn list_organizations(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<Organization>>, ApiError> {
    let repo = OrganizationRepository::new(state.pool.clone());
    let (organizations, total) = repo.list(&params).await?;

    Ok(Json(PaginatedResponse::new(organizations, total, &params)))
}

/// GET /api/v1/organizations/:id
pub async fn get_organization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Organization>, ApiError> {
    let repo = OrganizationRepository::new(state.pool.clone());
    let organization = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Organization not found".to_string()))?;

    Ok(Json(organization))
}

/// POST /api/v1/organizations
pub async fn create_organization(
    State(state): State<AppState>,
    Json(request): Json<CreateOrganizationRequest>,
) -> Result<(StatusCode, Json<Organization>), ApiError> {
    request.validate()?;

    let repo = OrganizationRepository::new(state.pool.clone());
    let organization = repo.create(&request.name).await?;

    info!(
        organization_id = %organization.id,
        name = %organization.name,
        "Organization created"
    );

    Ok((StatusCode::CREATED, Json(organization)))
}
