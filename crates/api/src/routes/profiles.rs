//! Profile routes, nested under an organization.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{CreateProfileRequest, Profile, UpdateProfileRequest};
use persistence::repositories::ProfileRepository;
use shared::pagination::{PaginatedResponse, PaginationParams};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/v1/organizations/:organization_id/profiles
pub async fn list_profiles(
    State(state): State<AppState>,
    Path(organization_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<Profile>>, ApiError> {
    let repo = ProfileRepository::new(state.pool.clone());
    let (profiles, total) = repo.list(organization_id, &params).await?;

    Ok(Json(PaginatedResponse::new(profiles, total, &params)))
}

/// GET /api/v1/organizations/:organization_id/profiles/:id
pub async fn get_profile(
    State(state): State<AppState>,
    Path((organization_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Profile>, ApiError> {
    let repo = ProfileRepository::new(state.pool.clone());
    let profile = repo
        .find_by_id(organization_id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

    Ok(Json(profile))
}

/// POST /api/v1/organizations/:organization_id/profiles
pub async fn create_profile(
    State(state): State<AppState>,
    Path(organization_id): Path<Uuid>,
    Json(request): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<Profile>), ApiError> {
    request.validate()?;

    let repo = ProfileRepository::new(state.pool.clone());
    let profile = repo.create(organization_id, &request).await?;

    info!(
        organization_id = %organization_id,
        profile_id = %profile.id,
        username = %profile.username,
        "Profile created"
    );

    Ok((StatusCode::CREATED, Json(profile)))
}

/// PUT /api/v1/organizations/:organization_id/profiles/:id
pub async fn update_profile(
    State(state): State<AppState>,
    Path((organization_id, id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    request.validate()?;

    let repo = ProfileRepository::new(state.pool.clone());
    let profile = repo
        .update(organization_id, id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

    info!(
        organization_id = %organization_id,
        profile_id = %profile.id,
        "Profile updated"
    );

    Ok(Json(profile))
}
