//! Campaign routes, scoped to an organization.
//!
//! Update is the interesting path: name, template associations,
//! email-group associations, and status are applied inside a single
//! repository transaction, and a committed transition into `launched`
//! hands a [`CampaignLaunchedEvent`] to the configured notifier exactly
//! once. A notifier failure is logged and does not fail the request.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{Campaign, CampaignStatus, CreateCampaignRequest, UpdateCampaignRequest};
use domain::services::CampaignLaunchedEvent;
use persistence::repositories::{CampaignChanges, CampaignRepository};
use shared::pagination::{PaginatedResponse, PaginationParams};
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/v1/organizations/:organization_id/campaigns
pub async fn list_campaigns(
    State(state): State<AppState>,
    Path(organization_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<Campaign>>, ApiError> {
    let repo = CampaignRepository::new(state.pool.clone());
    let (campaigns, total) = repo.list(organization_id, &params).await?;

    Ok(Json(PaginatedResponse::new(campaigns, total, &params)))
}

/// GET /api/v1/organizations/:organization_id/campaigns/:campaign_id
pub async fn get_campaign(
    State(state): State<AppState>,
    Path((organization_id, campaign_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Campaign>, ApiError> {
    let repo = CampaignRepository::new(state.pool.clone());
    let campaign = repo
        .find_by_id(organization_id, campaign_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Campaign not found".to_string()))?;

    Ok(Json(campaign))
}

/// POST /api/v1/organizations/:organization_id/campaigns
pub async fn create_campaign(
    State(state): State<AppState>,
    Path(organization_id): Path<Uuid>,
    Json(request): Json<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<Campaign>), ApiError> {
    request.validate()?;

    let repo = CampaignRepository::new(state.pool.clone());
    let campaign = repo.create(organization_id, &request.name).await?;

    info!(
        organization_id = %organization_id,
        campaign_id = %campaign.id,
        name = %campaign.name,
        "Campaign created"
    );

    Ok((StatusCode::CREATED, Json(campaign)))
}

/// PATCH /api/v1/organizations/:organization_id/campaigns/:campaign_id
pub async fn update_campaign(
    State(state): State<AppState>,
    Path((organization_id, campaign_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateCampaignRequest>,
) -> Result<Json<Campaign>, ApiError> {
    request.validate()?;

    let repo = CampaignRepository::new(state.pool.clone());

    // A body with no changes skips the transaction entirely and just
    // echoes the current state.
    if request.is_empty() {
        let campaign = repo
            .find_by_id(organization_id, campaign_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Campaign not found".to_string()))?;
        return Ok(Json(campaign));
    }

    let changes = CampaignChanges {
        name: request.name,
        status: request.status,
        template_ids: request.templates,
        email_group_ids: request.email_groups,
    };

    let update = repo
        .update(organization_id, campaign_id, &changes)
        .await?
        .ok_or_else(|| ApiError::NotFound("Campaign not found".to_string()))?;

    info!(
        organization_id = %organization_id,
        campaign_id = %campaign_id,
        status = %update.campaign.status,
        "Campaign updated"
    );

    if update.previous_status != CampaignStatus::Launched
        && update.campaign.status == CampaignStatus::Launched
    {
        notify_launched(&state, &repo, &update.campaign).await;
    }

    Ok(Json(update.campaign))
}

/// Build the launched-event payload and hand it to the notifier.
///
/// The update is already committed at this point, so failures here are
/// logged rather than surfaced to the client.
async fn notify_launched(state: &AppState, repo: &CampaignRepository, campaign: &Campaign) {
    let email_addresses = match repo
        .launch_recipients(campaign.organization_id, campaign.id)
        .await
    {
        Ok(addresses) => addresses,
        Err(err) => {
            error!(
                campaign_id = %campaign.id,
                error = %err,
                "Failed to collect launch recipients"
            );
            return;
        }
    };

    let event = CampaignLaunchedEvent {
        campaign_id: campaign.id,
        organization_id: campaign.organization_id,
        email_addresses,
        template_ids: campaign.templates.iter().map(|t| t.id).collect(),
    };

    if let Err(err) = state.notifier.notify_campaign_launched(event).await {
        error!(
            campaign_id = %campaign.id,
            error = %err,
            "Failed to publish campaign.launched event"
        );
    } else {
        info!(campaign_id = %campaign.id, "Campaign launch event published");
    }
}
