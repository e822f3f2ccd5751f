//! Email address routes, nested under an organization.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{CreateEmailAddressRequest, EmailAddress};
use persistence::repositories::EmailAddressRepository;
use shared::pagination::{PaginatedResponse, PaginationParams};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/v1/organizations/:organization_id/email-addresses
pub async fn list_email_addresses(
    State(state): State<AppState>,
    Path(organization_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<EmailAddress>>, ApiError> {
    let repo = EmailAddressRepository::new(state.pool.clone());
    let (addresses, total) = repo.list(organization_id, &params).await?;

    Ok(Json(PaginatedResponse::new(addresses, total, &params)))
}

/// GET /api/v1/organizations/:organization_id/email-addresses/:id
pub async fn get_email_address(
    State(state): State<AppState>,
    Path((organization_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<EmailAddress>, ApiError> {
    let repo = EmailAddressRepository::new(state.pool.clone());
    let address = repo
        .find_by_id(organization_id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Email address not found".to_string()))?;

    Ok(Json(address))
}

/// POST /api/v1/organizations/:organization_id/email-addresses
pub async fn create_email_address(
    State(state): State<AppState>,
    Path(organization_id): Path<Uuid>,
    Json(request): Json<CreateEmailAddressRequest>,
) -> Result<(StatusCode, Json<EmailAddress>), ApiError> {
    request.validate()?;

    let repo = EmailAddressRepository::new(state.pool.clone());
    let address = repo.create(organization_id, &request.address).await?;

    info!(
        organization_id = %organization_id,
        email_address_id = %address.id,
        "Email address created"
    );

    Ok((StatusCode::CREATED, Json(address)))
}
