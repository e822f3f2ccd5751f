//! Template routes, scoped to an organization.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{CreateTemplateRequest, Template};
use persistence::repositories::TemplateRepository;
use shared::pagination::{PaginatedResponse, PaginationParams};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/v1/organizations/:organization_id/templates
pub async fn list_templates(
    State(state): State<AppState>,
    Path(organization_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<Template>>, ApiError> {
    let repo = TemplateRepository::new(state.pool.clone());
    let (templates, total) = repo.list(organization_id, &params).await?;

    Ok(Json(PaginatedResponse::new(templates, total, &params)))
}

/// GET /api/v1/organizations/:organization_id/templates/:template_id
pub async fn get_template(
    State(state): State<AppState>,
    Path((organization_id, template_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Template>, ApiError> {
    let repo = TemplateRepository::new(state.pool.clone());
    let template = repo
        .find_by_id(organization_id, template_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Template not found".to_string()))?;

    Ok(Json(template))
}

/// POST /api/v1/organizations/:organization_id/templates
pub async fn create_template(
    State(state): State<AppState>,
    Path(organization_id): Path<Uuid>,
    Json(request): Json<CreateTemplateRequest>,
) -> Result<(StatusCode, Json<Template>), ApiError> {
    request.validate()?;

    let repo = TemplateRepository::new(state.pool.clone());
    let template = repo.create(organization_id, &request).await?;

    info!(
        organization_id = %organization_id,
        template_id = %template.id,
        name = %template.name,
        "Template created"
    );

    Ok((StatusCode::CREATED, Json(template)))
}
